use crate::extract::ImageSource;
use crate::extract::images::extract_candidate_images;

const BANNER: &str = ".banner";

#[test]
fn test_banner_background_image_single_quotes() {
    let html = r#"
        <html><head><title>Site</title></head><body>
            <div class="banner" style="background-image:url('/img/a.jpg')"></div>
        </body></html>
    "#;

    let candidates = extract_candidate_images(html, "https://site.com/p", BANNER);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].url, "https://site.com/img/a.jpg");
    assert_eq!(candidates[0].source, ImageSource::BannerBackground);
    assert_eq!(candidates[0].page_title.as_deref(), Some("Site"));
}

#[test]
fn test_banner_background_image_quote_variants() {
    for style in [
        r#"background-image: url("https://cdn.site.com/b.png")"#,
        r#"background-image:url(https://cdn.site.com/b.png)"#,
        r#"color: red; background-image : url( 'https://cdn.site.com/b.png' )"#,
    ] {
        let html = format!(
            r#"<html><body><div class="banner" style="{style}"></div></body></html>"#
        );
        let candidates = extract_candidate_images(&html, "https://site.com/", BANNER);
        assert_eq!(candidates.len(), 1, "style failed: {style}");
        assert_eq!(candidates[0].url, "https://cdn.site.com/b.png");
    }
}

#[test]
fn test_protocol_relative_and_path_relative_resolution() {
    let html = r#"
        <html><body>
            <div class="banner" style="background-image:url(//cdn.site.com/x.jpg)"></div>
            <div class="banner" style="background-image:url(img/y.jpg)"></div>
        </body></html>
    "#;

    let candidates = extract_candidate_images(html, "https://site.com/section/page", BANNER);
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].url, "https://cdn.site.com/x.jpg");
    assert_eq!(candidates[1].url, "https://site.com/section/img/y.jpg");
}

#[test]
fn test_img_fallback_only_when_no_banner_candidates() {
    let html = r#"
        <html><body>
            <img src="/one.jpg" alt="first">
            <img src="/two.jpg">
        </body></html>
    "#;

    let candidates = extract_candidate_images(html, "https://site.com/", BANNER);
    assert_eq!(candidates.len(), 2);
    assert_eq!(candidates[0].url, "https://site.com/one.jpg");
    assert_eq!(candidates[0].source, ImageSource::ImgSrc);
    assert_eq!(candidates[0].alt_text.as_deref(), Some("first"));
    assert_eq!(candidates[1].url, "https://site.com/two.jpg");
}

#[test]
fn test_banner_candidates_shadow_img_fallback() {
    let html = r#"
        <html><body>
            <img src="/ignored.jpg">
            <div class="banner" style="background-image:url('/banner.jpg')"></div>
        </body></html>
    "#;

    let candidates = extract_candidate_images(html, "https://site.com/", BANNER);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].url, "https://site.com/banner.jpg");
    assert_eq!(candidates[0].source, ImageSource::BannerBackground);
}

#[test]
fn test_empty_page_yields_empty_list() {
    let candidates =
        extract_candidate_images("<html><body><p>text only</p></body></html>", "https://site.com/", BANNER);
    assert!(candidates.is_empty());
}

#[test]
fn test_banner_without_background_image_is_skipped() {
    let html = r#"
        <html><body>
            <div class="banner" style="color: blue"></div>
            <img src="/fallback.jpg">
        </body></html>
    "#;

    let candidates = extract_candidate_images(html, "https://site.com/", BANNER);
    assert_eq!(candidates.len(), 1);
    assert_eq!(candidates[0].url, "https://site.com/fallback.jpg");
    assert_eq!(candidates[0].source, ImageSource::ImgSrc);
}
