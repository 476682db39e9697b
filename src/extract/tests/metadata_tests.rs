use crate::extract::metadata::{NO_DESCRIPTION, NO_TITLE, extract_text_metadata};

#[test]
fn test_title_and_description_extracted() {
    let html = r#"
        <html><head>
            <title> Example Site </title>
            <meta name="description" content="A plain description">
        </head><body></body></html>
    "#;

    let meta = extract_text_metadata(html);
    assert_eq!(meta.title, "Example Site");
    assert_eq!(meta.description, "A plain description");
}

#[test]
fn test_name_description_preferred_over_og() {
    let html = r#"
        <html><head>
            <title>Example</title>
            <meta property="og:description" content="og version">
            <meta name="description" content="name version">
        </head></html>
    "#;

    let meta = extract_text_metadata(html);
    assert_eq!(meta.description, "name version");
}

#[test]
fn test_og_description_used_as_fallback() {
    let html = r#"
        <html><head>
            <title>Example</title>
            <meta property="og:description" content="og version">
        </head></html>
    "#;

    let meta = extract_text_metadata(html);
    assert_eq!(meta.description, "og version");
}

#[test]
fn test_placeholders_for_missing_markup() {
    let meta = extract_text_metadata("<html><body><p>bare page</p></body></html>");
    assert_eq!(meta.title, NO_TITLE);
    assert_eq!(meta.description, NO_DESCRIPTION);
}

#[test]
fn test_malformed_html_degrades_to_placeholders() {
    // Garbage input produces empty matches, never a failure
    let meta = extract_text_metadata("<<<>>> not <html at all");
    assert_eq!(meta.title, NO_TITLE);
    assert_eq!(meta.description, NO_DESCRIPTION);
}

#[test]
fn test_empty_meta_content_is_ignored() {
    let html = r#"
        <html><head>
            <title>Example</title>
            <meta name="description" content="  ">
            <meta property="og:description" content="real one">
        </head></html>
    "#;

    let meta = extract_text_metadata(html);
    assert_eq!(meta.description, "real one");
}
