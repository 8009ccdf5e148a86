#[cfg(test)]
mod tests {
    use crate::api::{Blog, BlogId, NewBlog};

    #[test]
    fn test_blog_id_new() {
        let id = BlogId::new("67ad639c85e7cfba3d8a5fa1");
        assert_eq!(id.value(), "67ad639c85e7cfba3d8a5fa1");
    }

    #[test]
    fn test_blog_id_equality() {
        let id1 = BlogId::new("a");
        let id2 = BlogId::new("a");
        let id3 = BlogId::new("b");

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_blog_id_display() {
        let id = BlogId::new("abc-123");
        assert_eq!(id.to_string(), "abc-123");
    }

    #[test]
    fn test_blog_ids_hash() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(BlogId::new("a"));
        set.insert(BlogId::new("b"));
        set.insert(BlogId::new("a")); // Duplicate

        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_blog_serializes_id_as_plain_string() {
        let blog = Blog {
            id: BlogId::new("abc"),
            title: "fullstackopen web dev".to_string(),
            author: "noname".to_string(),
            url: "https://fullstackopen.com/en".to_string(),
            likes: 24,
        };

        let json = serde_json::to_value(&blog).unwrap();
        assert_eq!(json["id"], "abc");
        assert_eq!(json["likes"], 24);
    }

    #[test]
    fn test_new_blog_deserializes_without_likes() {
        let candidate: NewBlog = serde_json::from_str(
            r#"{"title": "t", "author": "a", "url": "u", "likes": null}"#,
        )
        .unwrap();
        assert_eq!(candidate.likes, None);
    }
}
