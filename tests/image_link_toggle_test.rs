use linkscope::{exclude_image_links, prepare_links, LinkFilter, Options};

const PAGE_LINKS: [&str; 6] = [
    "https://example.com/gallery/",
    "https://example.com/gallery/photo1.jpg",
    "https://example.com/gallery/photo2.JPEG",
    "https://example.com/icons/favicon.ico",
    "https://example.com/anim.gif?v=3",
    "https://example.com/diagram.svg",
];

// ============================================================================
// DIRECT FILTER
// ============================================================================

#[test]
fn exclude_image_links_drops_listed_extensions() {
    let kept = exclude_image_links(&PAGE_LINKS);
    assert_eq!(
        kept,
        vec![
            "https://example.com/gallery/",
            "https://example.com/anim.gif?v=3",
            "https://example.com/diagram.svg",
        ]
    );
}

#[test]
fn exclude_image_links_only_checks_suffix() {
    let kept = exclude_image_links(&["https://example.com/photo.jpg/comments/"]);
    assert_eq!(kept, vec!["https://example.com/photo.jpg/comments/"]);
}

// ============================================================================
// PIPELINE TOGGLE
// ============================================================================

#[test]
fn exclude_images_true_removes_images_after_query_stripping() {
    let kept =
        prepare_links("example.com", &PAGE_LINKS, &Options::default()).expect("valid domain");

    // The query is stripped first, so anim.gif is caught here.
    assert_eq!(
        kept,
        vec!["https://example.com/gallery/", "https://example.com/diagram.svg/"]
    );
}

#[test]
fn exclude_images_false_keeps_images() {
    let options = Options {
        exclude_images: false,
        ..Options::default()
    };
    let kept = prepare_links("example.com", &PAGE_LINKS, &options).expect("valid domain");

    assert_eq!(kept.len(), 6);
    assert!(kept.contains(&"https://example.com/gallery/photo1.jpg".to_string()));
    assert!(kept.contains(&"https://example.com/anim.gif".to_string()));
}

#[test]
fn link_filter_honours_image_toggle() {
    let keep = LinkFilter::new(Options {
        exclude_images: false,
        ..Options::default()
    });
    let drop = LinkFilter::new(Options::default());

    let kept = keep.prepare("example.com", &PAGE_LINKS).expect("valid domain");
    let dropped = drop.prepare("example.com", &PAGE_LINKS).expect("valid domain");

    assert!(!keep.options().exclude_images);
    assert!(kept.len() > dropped.len());
}
