//! Aggregation functions over blog collections.
//!
//! All functions here are pure and total: they read their input slice,
//! allocate only local state, and never fail. An empty collection yields
//! 0 for sums and `None` where a single winner has to be picked, so
//! callers can tell "no blogs" apart from "a blog with zero likes".
//!
//! Ties are broken deterministically in favor of the first-encountered
//! candidate: winners are selected with a strict `>` scan over the input
//! in its original order, so hash-map iteration order never leaks into
//! the result.

use std::collections::HashMap;

use crate::api::{AuthorBlogCount, AuthorLikeTotal, Blog, FavoriteBlog};

/// Sum the likes of every blog in the list.
pub fn total_likes(blogs: &[Blog]) -> u64 {
    blogs.iter().map(|blog| blog.likes).sum()
}

/// Find the blog with the most likes, projected to title/author/likes.
///
/// Returns `None` for an empty list. On a tie the blog with the lowest
/// index wins.
pub fn favorite_blog(blogs: &[Blog]) -> Option<FavoriteBlog> {
    let mut best: Option<&Blog> = None;
    for blog in blogs {
        match best {
            Some(current) if blog.likes <= current.likes => {}
            _ => best = Some(blog),
        }
    }

    best.map(|blog| FavoriteBlog {
        title: blog.title.clone(),
        author: blog.author.clone(),
        likes: blog.likes,
    })
}

/// Find the author with the most blog entries.
///
/// Groups by exact author string. Returns `None` for an empty list; on a
/// tie the first author to reach the maximum in a left-to-right scan
/// wins.
pub fn most_blogs(blogs: &[Blog]) -> Option<AuthorBlogCount> {
    let counts = group_by_author(blogs, |_| 1);

    pick_max(blogs, &counts).map(|(author, blogs)| AuthorBlogCount {
        author: author.to_string(),
        blogs,
    })
}

/// Find the author with the highest summed likes.
///
/// Same grouping and tie-break policy as [`most_blogs`].
pub fn most_likes(blogs: &[Blog]) -> Option<AuthorLikeTotal> {
    let totals = group_by_author(blogs, |blog| blog.likes);

    pick_max(blogs, &totals).map(|(author, likes)| AuthorLikeTotal {
        author: author.to_string(),
        likes,
    })
}

/// Accumulate a per-author total in one pass.
fn group_by_author<'a>(blogs: &'a [Blog], weight: impl Fn(&Blog) -> u64) -> HashMap<&'a str, u64> {
    let mut totals: HashMap<&str, u64> = HashMap::new();
    for blog in blogs {
        *totals.entry(blog.author.as_str()).or_insert(0) += weight(blog);
    }
    totals
}

/// Scan the input in original order and keep the first author whose total
/// is strictly greater than everything seen so far.
fn pick_max<'a>(blogs: &'a [Blog], totals: &HashMap<&'a str, u64>) -> Option<(&'a str, u64)> {
    let mut best: Option<(&str, u64)> = None;
    for blog in blogs {
        let total = totals[blog.author.as_str()];
        match best {
            Some((_, max)) if total <= max => {}
            _ => best = Some((blog.author.as_str(), total)),
        }
    }
    best
}
