#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

pub const SAMPLE_BLOG: &str = r#"<?xml version="1.0" encoding="utf-8"?>
<blog root-url="http://example.com/" date-created="2010-06-01T00:00:00" xmlns="http://www.blogml.com/2006/09/BlogML" xmlns:xs="http://www.w3.org/2001/XMLSchema">
  <title type="text"><![CDATA[Example]]></title>
  <sub-title type="text"><![CDATA[]]></sub-title>
  <authors>
    <author id="a1" date-created="2010-01-01T00:00:00" date-modified="2010-01-01T00:00:00" approved="true" email="me@example.com">
      <title type="text"><![CDATA[Admin]]></title>
    </author>
  </authors>
  <categories>
    <category id="c1" date-created="2010-01-01T00:00:00" date-modified="2010-01-01T00:00:00" approved="true" parentref="0">
      <title type="text"><![CDATA[Tech News]]></title>
    </category>
    <category id="c2" date-created="2010-01-01T00:00:00" date-modified="2010-01-01T00:00:00" approved="true" parentref="0">
      <title type="text"><![CDATA[Life & Style]]></title>
    </category>
  </categories>
  <posts>
    <post id="p1" date-created="2010-01-01T00:00:00Z" date-modified="2010-01-03T12:30:00Z" approved="true" post-url="/post/hello">
      <title type="text"><![CDATA[Hello, World!]]></title>
      <content type="text"><![CDATA[<p>hi</p>]]></content>
      <post-name type="text"><![CDATA[hello]]></post-name>
      <categories>
        <category ref="c2" />
      </categories>
      <authors>
        <author ref="a1" />
      </authors>
    </post>
  </posts>
</blog>
"#;

pub fn write_input(dir: &Path, name: &str, xml: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, xml).unwrap();
    path
}

/// Wraps category and post markup in a BlogML root element.
pub fn blog(categories: &str, posts: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="utf-8"?>
<blog xmlns="http://www.blogml.com/2006/09/BlogML">
  <categories>{categories}</categories>
  <posts>{posts}</posts>
</blog>"#
    )
}

pub fn category(id: &str, title: &str) -> String {
    format!(r#"<category id="{id}"><title type="text"><![CDATA[{title}]]></title></category>"#)
}

pub fn post(title: &str, created: &str, refs: &[&str]) -> String {
    let refs = if refs.is_empty() {
        String::new()
    } else {
        let inner: String = refs
            .iter()
            .map(|r| format!(r#"<category ref="{r}"/>"#))
            .collect();
        format!("<categories>{inner}</categories>")
    };
    format!(
        r#"<post date-created="{created}" date-modified="{created}"><title type="text"><![CDATA[{title}]]></title><content type="text"><![CDATA[body of {title}]]></content>{refs}</post>"#
    )
}
