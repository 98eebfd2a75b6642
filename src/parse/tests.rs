// Parse module tests.

use super::*;
use crate::dom::HtmlDocument;
use crate::models::{MicrodataValue, OneOrMany};
use scraper::Html;

fn extract_from(html: &str) -> Metadata {
    let document = Html::parse_document(html);
    extract(&HtmlDocument::new(&document)).unwrap()
}

#[test]
fn test_extract_empty_document() {
    let metadata = extract_from("<html><head></head><body></body></html>");
    assert!(metadata.meta.is_empty());
    assert!(metadata.favicons.is_empty());
    assert!(metadata.feeds.is_empty());
    assert!(metadata.jsonld.is_empty());
    assert!(metadata.microdata.is_empty());
    assert_eq!(metadata.title(), None);
    assert_eq!(metadata.favicon(), "/favicon.ico");
}

// Meta tags

#[test]
fn test_meta_property_and_name_are_separate_keys() {
    let metadata = extract_from(
        r#"<meta property="og:title" content="OG"><meta name="title" content="Plain">"#,
    );
    assert_eq!(metadata.meta_values("og:title"), ["OG"]);
    assert_eq!(metadata.meta_values("title"), ["Plain"]);
}

#[test]
fn test_meta_both_attributes_on_one_tag_push_twice() {
    let metadata = extract_from(r#"<meta property="og:title" name="og:title" content="Twice">"#);
    assert_eq!(metadata.meta_values("og:title"), ["Twice", "Twice"]);
}

#[test]
fn test_meta_duplicates_in_document_order() {
    let metadata = extract_from(
        r#"<meta property="og:title" content="first"><meta name="og:title" content="second">"#,
    );
    assert_eq!(metadata.meta_values("og:title"), ["first", "second"]);
    assert_eq!(metadata.title(), Some("first"));
}

#[test]
fn test_meta_keys_keep_original_casing() {
    let metadata = extract_from(r#"<meta name="Description" content="x">"#);
    assert_eq!(metadata.meta_values("Description"), ["x"]);
    assert!(metadata.meta_values("description").is_empty());
    assert_eq!(metadata.description(), None);
}

#[test]
fn test_meta_without_content_is_ignored() {
    let metadata = extract_from(
        r#"<meta name="description"><meta name="keywords" content=""><meta charset="utf-8">"#,
    );
    assert!(metadata.meta.is_empty());
}

#[test]
fn test_meta_content_entities_decoded() {
    // The parser decodes one level of entities; the decoder handles the second
    let metadata = extract_from(r#"<meta name="description" content="Fish &amp;amp; Chips &amp;#x263A;">"#);
    assert_eq!(metadata.description(), Some("Fish & Chips \u{263A}"));
}

// Open Graph media

#[test]
fn test_og_images_structured_properties() {
    let metadata = extract_from(
        r#"
        <meta property="og:image" content="a.jpg">
        <meta property="og:image:width" content="600">
        <meta property="og:image:alt" content="First">
        <meta property="og:image" content="b.jpg">
        "#,
    );
    assert_eq!(metadata.images.len(), 2);
    assert_eq!(metadata.images[0].url(), "a.jpg");
    assert_eq!(metadata.images[0].width(), Some("600"));
    assert_eq!(metadata.images[0].alt(), Some("First"));
    assert_eq!(metadata.images[1].url(), "b.jpg");
    assert_eq!(metadata.images[1].width(), None);
    // The raw values stay in `meta` too
    assert_eq!(metadata.meta_values("og:image"), ["a.jpg", "b.jpg"]);
}

#[test]
fn test_og_image_url_starts_new_image() {
    let metadata = extract_from(
        r#"
        <meta property="og:image:url" content="a.jpg">
        <meta property="og:image:secure_url" content="https://a.jpg">
        <meta property="og:image:type" content="image/jpeg">
        <meta property="og:image:height" content="315">
        "#,
    );
    assert_eq!(metadata.images.len(), 1);
    let image = &metadata.images[0];
    assert_eq!(image.url(), "a.jpg");
    assert_eq!(image.secure_url(), Some("https://a.jpg"));
    assert_eq!(image.media_type(), Some("image/jpeg"));
    assert_eq!(image.height(), Some("315"));
}

#[test]
fn test_og_image_property_before_any_image_is_dropped() {
    let metadata = extract_from(
        r#"<meta property="og:image:width" content="600"><meta property="og:image" content="a.jpg">"#,
    );
    assert_eq!(metadata.images.len(), 1);
    assert_eq!(metadata.images[0].width(), None);
}

#[test]
fn test_og_videos_independent_of_images() {
    let metadata = extract_from(
        r#"
        <meta property="og:video" content="v.mp4">
        <meta property="og:image" content="poster.jpg">
        <meta property="og:video:width" content="1280">
        <meta property="og:video:type" content="video/mp4">
        "#,
    );
    assert_eq!(metadata.videos.len(), 1);
    assert_eq!(metadata.videos[0].url(), "v.mp4");
    assert_eq!(metadata.videos[0].width(), Some("1280"));
    assert_eq!(metadata.videos[0].media_type(), Some("video/mp4"));
    assert_eq!(metadata.images.len(), 1);
    assert_eq!(metadata.images[0].width(), None);
}

// Links

#[test]
fn test_favicons_collected_with_attributes() {
    let metadata = extract_from(
        r#"
        <link rel="icon" type="image/png" sizes="32x32" href="/32.png">
        <link rel=" Shortcut Icon " href="/favicon.ico">
        <link rel="apple-touch-icon" href="/apple.png">
        <link rel="icon" href="">
        "#,
    );
    assert_eq!(metadata.favicons.len(), 2);
    assert_eq!(metadata.favicons[0].href(), "/32.png");
    assert_eq!(metadata.favicons[0].icon_type(), Some("image/png"));
    assert_eq!(metadata.favicons[0].sizes(), Some("32x32"));
    assert_eq!(metadata.favicons[1].rel(), Some("shortcut icon"));
    assert_eq!(metadata.icon_href.as_deref(), Some("/32.png"));
    assert_eq!(metadata.shortcut_icon_href.as_deref(), Some("/favicon.ico"));
}

#[test]
fn test_first_icon_href_wins() {
    let metadata = extract_from(r#"<link rel="icon" href="/a.gif"><link rel="icon" href="/b.gif">"#);
    assert_eq!(metadata.icon_href.as_deref(), Some("/a.gif"));
    assert_eq!(metadata.favicon(), "/a.gif");
}

#[test]
fn test_canonical_first_non_empty() {
    let metadata = extract_from(
        r#"
        <link rel="canonical" href="">
        <link rel="canonical" href="https://example.com/a">
        <link rel="canonical" href="https://example.com/b">
        "#,
    );
    assert_eq!(metadata.canonical_url(), Some("https://example.com/a"));
}

#[test]
fn test_feeds_filtered_by_type() {
    let metadata = extract_from(
        r#"
        <link rel="alternate" type="text/html" href="/fr/">
        <link rel="alternate" type="application/rss+xml" title="RSS" href="/rss.xml">
        <link rel="alternate" type="application/atom+xml" href="/atom.xml">
        <link rel="alternate" href="/untyped">
        <link rel="alternate" type="application/feed+json" href="">
        <link rel="alternate" type="application/json" href="/feed.json">
        "#,
    );
    let hrefs: Vec<&str> = metadata.feeds.iter().map(|f| f.href()).collect();
    assert_eq!(hrefs, vec!["/rss.xml", "/atom.xml", "/feed.json"]);
    assert_eq!(metadata.feeds[0].title(), Some("RSS"));
    assert_eq!(metadata.feeds[1].title(), None);
    assert_eq!(metadata.feeds[2].feed_type(), Some("application/json"));
}

// Title fallbacks

#[test]
fn test_title_and_heading_fallbacks() {
    let metadata = extract_from(
        "<head><title>  Doc Title </title></head><body><h1>Heading</h1><h1>Second</h1></body>",
    );
    assert_eq!(metadata.title_text.as_deref(), Some("Doc Title"));
    assert_eq!(metadata.first_heading_text.as_deref(), Some("Heading"));
    assert_eq!(metadata.title(), Some("Doc Title"));
}

#[test]
fn test_heading_used_when_no_title() {
    let metadata = extract_from("<body><h1>Only <em>heading</em></h1></body>");
    assert_eq!(metadata.title(), Some("Only heading"));
}

#[test]
fn test_blank_title_falls_through_to_heading() {
    let metadata = extract_from("<head><title>   </title></head><body><h1>Heading</h1></body>");
    assert_eq!(metadata.title_text, None);
    assert_eq!(metadata.title(), Some("Heading"));
}

// JSON-LD

#[test]
fn test_json_ld_object_and_array() {
    let metadata = extract_from(
        r#"
        <script type="application/ld+json">{"@type": "WebSite"}</script>
        <script type="application/ld+json">[{"a":1},{"a":2}]</script>
        "#,
    );
    assert_eq!(metadata.jsonld.len(), 3);
    assert_eq!(metadata.jsonld[0]["@type"], "WebSite");
    assert_eq!(metadata.jsonld[2]["a"], 2);
}

#[test]
fn test_json_ld_flattens_one_level_only() {
    let metadata = extract_from(r#"<script type="application/ld+json">[[1, 2], {"b": [3]}]</script>"#);
    assert_eq!(metadata.jsonld.len(), 2);
    assert_eq!(metadata.jsonld[0], serde_json::json!([1, 2]));
}

#[test]
fn test_json_ld_malformed_block_skipped() {
    let metadata = extract_from(
        r#"
        <script type="application/ld+json">{ not json </script>
        <script type="application/ld+json">{"ok": true}</script>
        <script type="text/javascript">{"ignored": true}</script>
        "#,
    );
    assert_eq!(metadata.jsonld.len(), 1);
    assert_eq!(metadata.jsonld[0]["ok"], true);
}

// Microdata

#[test]
fn test_microdata_basic_item() {
    let metadata = extract_from(
        r#"
        <div itemscope itemtype="https://schema.org/Person" itemid=" urn:person:1 ">
            <span itemprop="name">Ada</span>
            <a itemprop="url" href="https://ada.example">site</a>
            <img itemprop="image" src="/ada.jpg">
            <meta itemprop="nationality" content="British &amp;amp; proud">
            <time itemprop="birthDate" datetime="1815-12-10">December 1815</time>
            <data itemprop="rank" value="1">first</data>
        </div>
        "#,
    );
    assert_eq!(metadata.microdata.len(), 1);
    let item = &metadata.microdata[0];
    assert_eq!(
        item.item_type.as_deref(),
        Some(&["https://schema.org/Person".to_string()][..])
    );
    assert_eq!(item.id.as_deref(), Some("urn:person:1"));
    assert_eq!(item.text("name"), Some("Ada"));
    assert_eq!(item.text("url"), Some("https://ada.example"));
    assert_eq!(item.text("image"), Some("/ada.jpg"));
    assert_eq!(item.text("nationality"), Some("British & proud"));
    assert_eq!(item.text("birthDate"), Some("1815-12-10"));
    assert_eq!(item.text("rank"), Some("1"));
}

#[test]
fn test_microdata_multiple_values_and_names() {
    let metadata = extract_from(
        r#"
        <div itemscope>
            <span itemprop="tag">a</span>
            <span itemprop="tag keyword">b</span>
            <time itemprop="when">no datetime</time>
        </div>
        "#,
    );
    let item = &metadata.microdata[0];
    assert_eq!(item.item_type, None);
    assert_eq!(
        item.property("tag"),
        Some(&OneOrMany::Many(vec![
            MicrodataValue::Text("a".to_string()),
            MicrodataValue::Text("b".to_string()),
        ]))
    );
    assert_eq!(item.text("keyword"), Some("b"));
    assert_eq!(item.text("when"), Some("no datetime"));
}

#[test]
fn test_microdata_nested_item_not_top_level() {
    let metadata = extract_from(
        r#"
        <div itemscope itemtype="https://schema.org/Book">
            <span itemprop="name">Notes</span>
            <div itemprop="author" itemscope itemtype="https://schema.org/Person">
                <span itemprop="name">Ada</span>
            </div>
        </div>
        "#,
    );
    assert_eq!(metadata.microdata.len(), 1);
    let book = &metadata.microdata[0];
    // The nested item's own name does not leak into the book
    assert_eq!(book.text("name"), Some("Notes"));
    let author = book.property("author").and_then(|v| v.as_one()).and_then(|v| v.as_item());
    assert_eq!(author.and_then(|a| a.text("name")), Some("Ada"));
}

#[test]
fn test_microdata_itemref_in_document_order() {
    let metadata = extract_from(
        r#"
        <p id="early" itemprop="note">before</p>
        <div itemscope itemref="late early">
            <span itemprop="note">inside</span>
        </div>
        <p id="late" itemprop="note">after</p>
        "#,
    );
    let item = &metadata.microdata[0];
    assert_eq!(
        item.property("note"),
        Some(&OneOrMany::Many(vec![
            MicrodataValue::Text("before".to_string()),
            MicrodataValue::Text("inside".to_string()),
            MicrodataValue::Text("after".to_string()),
        ]))
    );
}

#[test]
fn test_microdata_self_reference_terminates() {
    let metadata = extract_from(
        r#"<div id="a" itemscope itemref="a"><span itemprop="name">Loop</span></div>"#,
    );
    assert_eq!(metadata.microdata.len(), 1);
    assert_eq!(metadata.microdata[0].text("name"), Some("Loop"));
    assert_eq!(metadata.microdata[0].properties.len(), 1);
}

#[test]
fn test_microdata_cycle_between_nested_items_is_skipped() {
    // b and c pull each other in through itemref
    let metadata = extract_from(
        r#"
        <div itemscope>
            <div id="b" itemprop="child" itemscope itemref="c">
                <span itemprop="name">B</span>
            </div>
        </div>
        <div id="c" itemprop="child" itemscope itemref="b">
            <span itemprop="name">C</span>
        </div>
        "#,
    );
    assert_eq!(metadata.microdata.len(), 1);
    let root = &metadata.microdata[0];
    let b = root.property("child").and_then(|v| v.as_one()).and_then(|v| v.as_item()).unwrap();
    assert_eq!(b.text("name"), Some("B"));
    let c = b.property("child").and_then(|v| v.as_one()).and_then(|v| v.as_item()).unwrap();
    assert_eq!(c.text("name"), Some("C"));
    // c would pull b back in; b is its ancestor, so c has no "child"
    assert!(c.property("child").is_none());
}

#[test]
fn test_microdata_values_by_element_kind() {
    let metadata = extract_from(
        r#"
        <div itemscope>
            <area itemprop="region" href="/area">
            <link itemprop="related" href="/link">
            <audio itemprop="sound" src="/a.mp3"></audio>
            <embed itemprop="plugin" src="/e.swf">
            <iframe itemprop="frame" src="/frame.html"></iframe>
            <source itemprop="source" src="/s.webm">
            <track itemprop="captions" src="/t.vtt">
            <video itemprop="clip" src="/v.mp4"></video>
            <object itemprop="doc" data="/o.pdf"></object>
            <meter itemprop="score" value="0.7">70%</meter>
            <img itemprop="photo">
        </div>
        "#,
    );
    let item = &metadata.microdata[0];
    assert_eq!(item.text("region"), Some("/area"));
    assert_eq!(item.text("related"), Some("/link"));
    assert_eq!(item.text("sound"), Some("/a.mp3"));
    assert_eq!(item.text("plugin"), Some("/e.swf"));
    assert_eq!(item.text("frame"), Some("/frame.html"));
    assert_eq!(item.text("source"), Some("/s.webm"));
    assert_eq!(item.text("captions"), Some("/t.vtt"));
    assert_eq!(item.text("clip"), Some("/v.mp4"));
    assert_eq!(item.text("doc"), Some("/o.pdf"));
    assert_eq!(item.text("score"), Some("0.7"));
    // Missing attribute, not the element text
    assert_eq!(item.text("photo"), Some(""));
}

#[test]
fn test_microdata_deep_nesting_is_cut_off() {
    let depth = 3000;
    let mut html = String::from("<div itemscope>");
    for _ in 1..depth {
        html.push_str(r#"<div itemprop="child" itemscope>"#);
    }
    html.push_str("leaf");
    html.push_str(&"</div>".repeat(depth));

    let metadata = extract_from(&html);
    assert_eq!(metadata.microdata.len(), 1);

    let mut chain = 1;
    let mut item = &metadata.microdata[0];
    while let Some(child) = item
        .property("child")
        .and_then(|v| v.as_one())
        .and_then(|v| v.as_item())
    {
        chain += 1;
        item = child;
    }
    assert_eq!(chain, crate::config::MAX_MICRODATA_DEPTH);
}

#[test]
fn test_extract_is_idempotent() {
    let html = r#"
        <meta property="og:title" content="T">
        <link rel="icon" href="/i.png">
        <script type="application/ld+json">{"a": 1}</script>
        <div itemscope><span itemprop="x">y</span></div>
    "#;
    let document = Html::parse_document(html);
    let indexed = HtmlDocument::new(&document);
    let first = extract(&indexed).unwrap();
    let second = extract(&indexed).unwrap();
    assert_eq!(first, second);
}
