//! URL slug derivation from event names.

/// Derives a URL-safe slug from an event name.
///
/// Lower-cases the name, collapses each whitespace run into a single
/// hyphen, and strips every remaining character outside `[a-z0-9-]`.
/// Stripped characters are removed outright, not replaced, so
/// `"St. James' Park!"` becomes `"st-james-park"` rather than
/// `"st--james--park-"`. Hyphens already present in the name survive.
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_hyphen = false;
    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            pending_hyphen = true;
            continue;
        }
        if pending_hyphen {
            slug.push('-');
            pending_hyphen = false;
        }
        if matches!(c, 'a'..='z' | '0'..='9' | '-') {
            slug.push(c);
        }
    }
    if pending_hyphen {
        slug.push('-');
    }
    slug
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spaces_become_hyphens() {
        assert_eq!(slugify("Bushy Park"), "bushy-park");
    }

    #[test]
    fn punctuation_is_stripped_not_replaced() {
        assert_eq!(slugify("St. James' Park!"), "st-james-park");
    }

    #[test]
    fn whitespace_runs_collapse_to_one_hyphen() {
        assert_eq!(slugify("Fell  Foot\tPark"), "fell-foot-park");
    }

    #[test]
    fn existing_hyphens_are_kept_uncollapsed() {
        assert_eq!(slugify("Pier to Pier - North"), "pier-to-pier---north");
    }

    #[test]
    fn non_ascii_letters_are_stripped() {
        assert_eq!(slugify("Świdnik"), "widnik");
    }

    #[test]
    fn digits_survive() {
        assert_eq!(slugify("Area 51 Run"), "area-51-run");
    }

    #[test]
    fn empty_name_yields_empty_slug() {
        assert_eq!(slugify(""), "");
    }
}
