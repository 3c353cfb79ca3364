use chrono::NaiveDate;

use super::dto::{ImageLinks, Volume, VolumeInfo};
use crate::modules::catalog::domain::BookSearchResult;
use crate::modules::content::domain::{BookDetails, NewBook};

pub struct GoogleBooksMapper;

impl GoogleBooksMapper {
    pub fn to_search_result(volume: Volume) -> BookSearchResult {
        let info = volume.volume_info;

        BookSearchResult {
            google_books_id: volume.id,
            title: display_title(&info),
            authors: joined(info.authors.as_deref()),
            cover_url: cover_url(info.image_links.as_ref()),
            published_date: info.published_date,
        }
    }

    pub fn to_new_book(volume: Volume) -> NewBook {
        let info = volume.volume_info;

        let (isbn_10, isbn_13) = isbns(&info);

        NewBook {
            title: display_title(&info),
            original_title: None,
            description: info.description.clone(),
            cover_image_url: cover_url(info.image_links.as_ref()),
            google_books_id: volume.id,
            details: BookDetails {
                authors: joined(info.authors.as_deref()),
                publisher: info.publisher.clone(),
                published_date: parse_published_date(info.published_date.as_deref()),
                page_count: info.page_count,
                isbn_10,
                isbn_13,
                categories: joined(info.categories.as_deref()),
                language: info.language.clone(),
            },
        }
    }
}

fn display_title(info: &VolumeInfo) -> String {
    let base = info.title.clone().unwrap_or_else(|| "Untitled".to_string());
    match info.subtitle.as_deref() {
        Some(subtitle) if !subtitle.trim().is_empty() => format!("{}: {}", base, subtitle),
        _ => base,
    }
}

fn joined(values: Option<&[String]>) -> Option<String> {
    values
        .filter(|v| !v.is_empty())
        .map(|v| v.join(", "))
}

/// Best available cover, preferring the larger renditions. Google serves
/// plain-http links, which we upgrade in place.
fn cover_url(links: Option<&ImageLinks>) -> Option<String> {
    let links = links?;
    links
        .large
        .as_ref()
        .or(links.medium.as_ref())
        .or(links.thumbnail.as_ref())
        .map(|url| url.replacen("http://", "https://", 1))
}

fn isbns(info: &VolumeInfo) -> (Option<String>, Option<String>) {
    let mut isbn_10 = None;
    let mut isbn_13 = None;

    if let Some(identifiers) = &info.industry_identifiers {
        for identifier in identifiers {
            match identifier.id_type.as_str() {
                "ISBN_10" => isbn_10 = Some(identifier.identifier.clone()),
                "ISBN_13" => isbn_13 = Some(identifier.identifier.clone()),
                _ => {}
            }
        }
    }

    (isbn_10, isbn_13)
}

/// Google reports publication dates at year, month, or day precision.
fn parse_published_date(raw: Option<&str>) -> Option<NaiveDate> {
    let raw = raw?.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d") {
        return Some(date);
    }
    if let Ok(year) = raw.parse::<i32>() {
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::catalog::infrastructure::google_books::dto::IndustryIdentifier;

    fn volume_fixture() -> Volume {
        Volume {
            id: "zyTCAlFPjgYC".to_string(),
            volume_info: VolumeInfo {
                title: Some("The Google Story".to_string()),
                subtitle: None,
                authors: Some(vec![
                    "David A. Vise".to_string(),
                    "Mark Malseed".to_string(),
                ]),
                publisher: Some("Random House".to_string()),
                published_date: Some("2005-11".to_string()),
                description: Some("The story so far.".to_string()),
                industry_identifiers: Some(vec![
                    IndustryIdentifier {
                        id_type: "ISBN_10".to_string(),
                        identifier: "055380457X".to_string(),
                    },
                    IndustryIdentifier {
                        id_type: "ISBN_13".to_string(),
                        identifier: "9780553804577".to_string(),
                    },
                ]),
                page_count: Some(207),
                categories: Some(vec!["Business".to_string()]),
                image_links: Some(ImageLinks {
                    thumbnail: Some("http://books.google.com/thumb.jpg".to_string()),
                    medium: Some("http://books.google.com/medium.jpg".to_string()),
                    ..Default::default()
                }),
                language: Some("en".to_string()),
            },
        }
    }

    #[test]
    fn maps_volume_to_new_book() {
        let new_book = GoogleBooksMapper::to_new_book(volume_fixture());

        assert_eq!(new_book.google_books_id, "zyTCAlFPjgYC");
        assert_eq!(
            new_book.details.authors.as_deref(),
            Some("David A. Vise, Mark Malseed")
        );
        assert_eq!(new_book.details.isbn_10.as_deref(), Some("055380457X"));
        assert_eq!(new_book.details.isbn_13.as_deref(), Some("9780553804577"));
    }

    #[test]
    fn cover_prefers_larger_renditions_and_upgrades_scheme() {
        let new_book = GoogleBooksMapper::to_new_book(volume_fixture());

        assert_eq!(
            new_book.cover_image_url.as_deref(),
            Some("https://books.google.com/medium.jpg")
        );
    }

    #[test]
    fn subtitle_is_folded_into_the_title() {
        let mut volume = volume_fixture();
        volume.volume_info.subtitle = Some("Inside the Hottest Business".to_string());

        let result = GoogleBooksMapper::to_search_result(volume);
        assert_eq!(result.title, "The Google Story: Inside the Hottest Business");
    }

    #[test]
    fn partial_dates_parse_at_reduced_precision() {
        assert_eq!(
            parse_published_date(Some("2005-11-15")),
            NaiveDate::from_ymd_opt(2005, 11, 15)
        );
        assert_eq!(
            parse_published_date(Some("2005-11")),
            NaiveDate::from_ymd_opt(2005, 11, 1)
        );
        assert_eq!(
            parse_published_date(Some("2005")),
            NaiveDate::from_ymd_opt(2005, 1, 1)
        );
        assert_eq!(parse_published_date(Some("n.d.")), None);
    }
}
