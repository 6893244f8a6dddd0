use crate::film::Film;
use serde_json::{Map, Value};

/// Decode a single JSON object into a [`Film`].
///
/// Fails when the payload is not a JSON object, or when `id` or `title` is
/// missing or not a string.
pub fn decode_film(bytes: &[u8]) -> Result<Film, serde_json::Error> {
    let object: Map<String, Value> = serde_json::from_slice(bytes)?;
    film_from_object(object)
}

/// Decode a JSON array of film objects, preserving server order.
///
/// All-or-nothing: a non-array payload, a non-object element, or any element
/// that fails [`decode_film`] rules fails the whole collection. Duplicates are
/// kept as sent.
pub fn decode_films(bytes: &[u8]) -> Result<Vec<Film>, serde_json::Error> {
    let objects: Vec<Map<String, Value>> = serde_json::from_slice(bytes)?;
    objects.into_iter().map(film_from_object).collect()
}

// Going through a map rejects the positional (array) form that derived
// struct deserialization would otherwise accept.
fn film_from_object(object: Map<String, Value>) -> Result<Film, serde_json::Error> {
    serde_json::from_value(Value::Object(object))
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOTORO: &str = r#"{
        "id": "58611129-2dbc-4a81-a72f-77ddfc1b1b49",
        "title": "My Neighbor Totoro",
        "original_title": "となりのトトロ",
        "original_title_romanised": "Tonari no Totoro",
        "image": "https://image.tmdb.org/t/p/w600_and_h900_bestv2/rtGDOeG9LzoerkDGZF9dnVeLppL.jpg",
        "movie_banner": "https://image.tmdb.org/t/p/original/etqr6fOOCXQOgwrQXaKwenTSuzx.jpg",
        "description": "Two sisters move to the country with their father.",
        "director": "Hayao Miyazaki",
        "producer": "Hayao Miyazaki",
        "release_date": "1988",
        "running_time": "86",
        "rt_score": "93",
        "people": ["https://ghibliapi.vercel.app/people/"],
        "species": ["https://ghibliapi.vercel.app/species/"],
        "url": "https://ghibliapi.vercel.app/films/58611129-2dbc-4a81-a72f-77ddfc1b1b49"
    }"#;

    #[test]
    fn test_decode_full_film_ignores_unknown_keys() {
        let film = decode_film(TOTORO.as_bytes()).unwrap();

        assert_eq!(film.id, "58611129-2dbc-4a81-a72f-77ddfc1b1b49");
        assert_eq!(film.title, "My Neighbor Totoro");
        assert_eq!(film.original_title.as_deref(), Some("となりのトトロ"));
        assert_eq!(film.original_title_romanised.as_deref(), Some("Tonari no Totoro"));
        assert_eq!(film.release_date.as_deref(), Some("1988"));
        assert_eq!(film.running_time.as_deref(), Some("86"));
        assert_eq!(film.rt_score.as_deref(), Some("93"));
        assert!(film.movie_banner.is_some());
    }

    #[test]
    fn test_decode_film_without_optional_fields() {
        let film = decode_film(br#"{"id": "a", "title": "Only Required"}"#).unwrap();
        assert_eq!(film.title, "Only Required");
        assert!(film.is_sparse());
    }

    #[test]
    fn test_decode_film_null_optional_fields() {
        let film = decode_film(br#"{"id": "a", "title": "t", "director": null, "image": null}"#).unwrap();
        assert!(film.director.is_none());
        assert!(film.image.is_none());
    }

    #[test]
    fn test_decode_film_lenient_optional_types() {
        let film = decode_film(
            br#"{"id": "a", "title": "t", "rt_score": 95, "running_time": 124.5, "producer": true, "director": ["x"]}"#,
        )
        .unwrap();
        assert_eq!(film.rt_score.as_deref(), Some("95"));
        assert_eq!(film.running_time.as_deref(), Some("124.5"));
        assert!(film.producer.is_none());
        assert!(film.director.is_none());
    }

    #[test]
    fn test_decode_film_missing_required_fields() {
        assert!(decode_film(br#"{"title": "No Id"}"#).is_err());
        assert!(decode_film(br#"{"id": "a"}"#).is_err());
        assert!(decode_film(br#"{"id": null, "title": "t"}"#).is_err());
    }

    #[test]
    fn test_decode_film_required_fields_must_be_strings() {
        assert!(decode_film(br#"{"id": 7, "title": "t"}"#).is_err());
        assert!(decode_film(br#"{"id": "a", "title": {"en": "t"}}"#).is_err());
    }

    #[test]
    fn test_decode_films_preserves_order_and_duplicates() {
        let films = decode_films(
            br#"[
                {"id": "c", "title": "Third"},
                {"id": "a", "title": "First"},
                {"id": "c", "title": "Third again"}
            ]"#,
        )
        .unwrap();

        let ids: Vec<&str> = films.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids, vec!["c", "a", "c"]);
        assert_eq!(films[2].title, "Third again");
    }

    #[test]
    fn test_decode_films_empty_array() {
        assert!(decode_films(b"[]").unwrap().is_empty());
    }

    #[test]
    fn test_decode_films_rejects_non_array() {
        assert!(decode_films(br#"{"id": "a", "title": "t"}"#).is_err());
        assert!(decode_films(b"\"films\"").is_err());
        assert!(decode_films(b"not json").is_err());
    }

    #[test]
    fn test_decode_films_rejects_non_object_element() {
        assert!(decode_films(br#"[{"id": "a", "title": "t"}, 42]"#).is_err());
        assert!(decode_films(br#"[["a", "positional title"]]"#).is_err());
    }

    #[test]
    fn test_decode_films_is_all_or_nothing() {
        let result = decode_films(
            br#"[
                {"id": "a", "title": "Fine"},
                {"title": "Missing id"}
            ]"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_reencoding_preserves_values_and_order() {
        let payload = format!(r#"[{}, {{"id": "b", "title": "Sparse"}}]"#, TOTORO);
        let films = decode_films(payload.as_bytes()).unwrap();

        let encoded = serde_json::to_vec(&films).unwrap();
        let decoded = decode_films(&encoded).unwrap();

        assert_eq!(
            serde_json::to_value(&films).unwrap(),
            serde_json::to_value(&decoded).unwrap()
        );
        assert_eq!(decoded[0].title, "My Neighbor Totoro");
        assert_eq!(decoded[0].description, films[0].description);
        assert_eq!(decoded[1].id, "b");
        assert!(decoded[1].is_sparse());
    }
}
