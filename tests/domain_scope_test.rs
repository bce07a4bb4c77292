use linkscope::domain::registrable_domain;
use linkscope::lru::PatternCache;
use linkscope::{filter_links_by_domain, DomainScope};
use std::sync::Arc;
use std::thread;

const CANDIDATES: [&str; 8] = [
    "http://example.com/p",
    "http://blog.example.com/p",
    "http://a.b.example.com/p",
    "http://www.example.com/p",
    "https://shop.example.com/cart/",
    "http://example.org/p",
    "http://badexample.com/p",
    "http://example.com",
];

#[test]
fn subdomains_included() {
    let kept = filter_links_by_domain("blog.example.com", &CANDIDATES, true).expect("valid domain");
    assert_eq!(
        kept,
        vec![
            "http://example.com/p",
            "http://blog.example.com/p",
            "http://a.b.example.com/p",
            "http://www.example.com/p",
            "https://shop.example.com/cart/",
        ]
    );
}

#[test]
fn subdomains_excluded_except_www() {
    let kept =
        filter_links_by_domain("blog.example.com", &CANDIDATES, false).expect("valid domain");
    assert_eq!(kept, vec!["http://example.com/p", "http://www.example.com/p"]);
}

#[test]
fn nested_www_is_a_real_subdomain() {
    let kept = filter_links_by_domain(
        "example.com",
        &["http://www.www.example.com/", "http://www.blog.example.com/"],
        false,
    )
    .expect("valid domain");
    assert!(kept.is_empty());
}

#[test]
fn output_preserves_input_order_and_duplicates() {
    let links = [
        "http://example.com/b/",
        "http://example.com/a/",
        "http://other.com/",
        "http://example.com/b/",
    ];
    let kept = filter_links_by_domain("example.com", &links, false).expect("valid domain");
    assert_eq!(
        kept,
        vec!["http://example.com/b/", "http://example.com/a/", "http://example.com/b/"]
    );
}

#[test]
fn reference_given_as_url() {
    let kept = filter_links_by_domain("https://news.example.com/today?x=1", &CANDIDATES, false)
        .expect("valid domain");
    assert_eq!(kept, vec!["http://example.com/p", "http://www.example.com/p"]);
}

#[test]
fn only_last_two_labels_count() {
    // Multi-part public suffixes collapse to the suffix itself.
    assert_eq!(registrable_domain("news.bbc.co.uk").expect("valid"), "co.uk");
}

#[test]
fn scope_is_shareable_across_threads() {
    let scope = Arc::new(DomainScope::new("example.com", true).expect("valid domain"));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let scope = Arc::clone(&scope);
            thread::spawn(move || scope.matches(&format!("https://t{i}.example.com/")))
        })
        .collect();

    for handle in handles {
        assert!(handle.join().expect("thread panicked"));
    }
}

#[test]
fn cache_is_shareable_across_threads() {
    let cache = Arc::new(PatternCache::new(4));

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let cache = Arc::clone(&cache);
            thread::spawn(move || {
                let reference = if i % 2 == 0 { "a.example.com" } else { "b.example.net" };
                DomainScope::cached(reference, false, &cache)
                    .expect("valid domain")
                    .registrable()
                    .to_string()
            })
        })
        .collect();

    for handle in handles {
        let registrable = handle.join().expect("thread panicked");
        assert!(registrable == "example.com" || registrable == "example.net");
    }
    assert_eq!(cache.len(), 2);
}
