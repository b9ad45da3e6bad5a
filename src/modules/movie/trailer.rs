use time::PrimitiveDateTime;
use time::macros::format_description;

use crate::infrastructure::tmdb::payload::ApiVideo;

const TRAILER_TYPE: &str = "trailer";
const YOUTUBE_SITE: &str = "youtube";

fn parse_published_at(raw: &str) -> Option<PrimitiveDateTime> {
    let format = format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    );
    PrimitiveDateTime::parse(raw, format).ok()
}

/// Most recently published YouTube trailer. Entries whose timestamp does not
/// parse are skipped.
pub fn latest_trailer(videos: &[ApiVideo]) -> Option<&ApiVideo> {
    videos
        .iter()
        .filter(|v| v.kind.eq_ignore_ascii_case(TRAILER_TYPE))
        .filter(|v| v.site.eq_ignore_ascii_case(YOUTUBE_SITE))
        .filter_map(|v| parse_published_at(&v.published_at).map(|at| (at, v)))
        .max_by_key(|(at, _)| *at)
        .map(|(_, v)| v)
}

pub fn embed_url(embed_base: &str, key: &str) -> String {
    format!("{embed_base}{key}")
}
