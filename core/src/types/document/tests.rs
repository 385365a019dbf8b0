use super::*;

fn url(s: &str) -> PageUrl {
    PageUrl::try_new(s.to_string()).unwrap()
}

mod page_url {
    use super::*;

    #[test]
    fn test_trims_whitespace() {
        assert_eq!(url("  /about ").as_str(), "/about");
    }

    #[test]
    fn test_rejects_empty() {
        assert!(PageUrl::try_new("   ".to_string()).is_err());
    }
}

mod from_json_str {
    use super::*;

    #[test]
    fn test_parses_documents_in_order() {
        let json = r#"[
            {"url": "/about", "title": "About AMDCG", "description": "Advanced Materials group"},
            {"url": "/contact", "title": "Contact Us", "description": null}
        ]"#;

        let list = DocumentList::from_json_str(json).unwrap();

        assert_eq!(list.len(), 2);
        assert_eq!(list.as_slice()[0].url, url("/about"));
        assert_eq!(
            list.as_slice()[0].description.as_deref(),
            Some("Advanced Materials group")
        );
        assert_eq!(list.as_slice()[1].title, "Contact Us");
        assert_eq!(list.as_slice()[1].description, None);
    }

    #[test]
    fn test_missing_description_is_none() {
        let list = DocumentList::from_json_str(r#"[{"url": "/venue", "title": "Venue"}]"#).unwrap();

        assert_eq!(list.as_slice()[0].description, None);
    }

    #[test]
    fn test_empty_array() {
        let list = DocumentList::from_json_str("[]").unwrap();

        assert!(list.is_empty());
    }

    #[test]
    fn test_rejects_non_array() {
        let err = DocumentList::from_json_str(r#"{"url": "/"}"#).unwrap_err();

        assert!(matches!(err, IndexError::Parse(_)));
    }

    #[test]
    fn test_rejects_missing_title() {
        assert!(DocumentList::from_json_str(r#"[{"url": "/about"}]"#).is_err());
    }

    #[test]
    fn test_rejects_empty_url() {
        assert!(DocumentList::from_json_str(r#"[{"url": "", "title": "Home"}]"#).is_err());
    }
}

mod duplicate_urls {
    use super::*;

    fn doc(u: &str, title: &str) -> SearchDocument {
        SearchDocument {
            url: url(u),
            title: title.to_string(),
            description: None,
        }
    }

    #[test]
    fn test_duplicates_are_kept_and_reported_once() {
        let list = DocumentList::new(vec![
            doc("/a", "A"),
            doc("/b", "B"),
            doc("/a", "A again"),
            doc("/a", "A third"),
        ]);

        assert_eq!(list.len(), 4);
        assert_eq!(list.duplicate_urls(), vec![&url("/a")]);
    }

    #[test]
    fn test_no_duplicates() {
        let list = DocumentList::new(vec![doc("/a", "A"), doc("/b", "B")]);

        assert!(list.duplicate_urls().is_empty());
    }
}

#[test]
fn test_clone_shares_documents() {
    let list = DocumentList::from_json_str(r#"[{"url": "/", "title": "Home"}]"#).unwrap();
    let clone = list.clone();

    assert!(std::ptr::eq(list.as_slice(), clone.as_slice()));
}
