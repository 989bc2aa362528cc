//! Compiled-in locale resources.
//!
//! Phrase templates are a static data asset: one lookup function per shipped
//! locale, keyed by [`UnitName`]. Adding a locale is additive — write its
//! lookup and route its language subtag in [`lookup`]. Custom units never
//! appear here; they carry their own templates.
//!
//! English is the crate-wide default locale and must stay complete for every
//! built-in unit: the resolver treats a miss here as a configuration defect.

use crate::{core::units::UnitName, locale::templates::LocaleTemplate};

/// The process-default locale tag; the resolver's final fallback.
pub(crate) const DEFAULT_LOCALE: &str = "en";

/// Resolve `(locale tag, unit)` to a template. Tags match exactly; the
/// resolver is responsible for trying the full tag, then the base language,
/// then [`DEFAULT_LOCALE`].
pub(crate) fn lookup(tag: &str, name: &UnitName) -> Option<LocaleTemplate> {
    match tag {
        "en" => english(name),
        "de" => german(name),
        _ => None,
    }
}

fn template(
    singular: &str, plural: &str, pattern: &str, future_prefix: &str, future_suffix: &str,
    past_prefix: &str, past_suffix: &str,
) -> LocaleTemplate {
    LocaleTemplate {
        singular: singular.to_string(),
        plural: plural.to_string(),
        pattern: pattern.to_string(),
        future_prefix: future_prefix.to_string(),
        future_suffix: future_suffix.to_string(),
        past_prefix: past_prefix.to_string(),
        past_suffix: past_suffix.to_string(),
        rounding_tolerance: super::templates::DEFAULT_ROUNDING_TOLERANCE,
    }
}

/// Suffix-decorated English: `"<n> <unit> from now"` / `"<n> <unit> ago"`.
fn english(name: &UnitName) -> Option<LocaleTemplate> {
    let (singular, plural) = match name {
        // The moment phrase lives entirely in the suffix slots.
        UnitName::Moment => {
            return Some(template("moment", "moments", "", "", "moments from now", "", "moments ago"));
        }
        UnitName::Second => ("second", "seconds"),
        UnitName::Minute => ("minute", "minutes"),
        UnitName::Hour => ("hour", "hours"),
        UnitName::Day => ("day", "days"),
        UnitName::Week => ("week", "weeks"),
        UnitName::Month => ("month", "months"),
        UnitName::Year => ("year", "years"),
        UnitName::Decade => ("decade", "decades"),
        UnitName::Century => ("century", "centuries"),
        UnitName::Custom(_) => return None,
    };
    Some(template(singular, plural, "%n %u", "", "from now", "", "ago"))
}

/// Prefix-decorated German: `"in <n> <unit>"` / `"vor <n> <unit>"`.
fn german(name: &UnitName) -> Option<LocaleTemplate> {
    let (singular, plural) = match name {
        UnitName::Moment => {
            return Some(template("Augenblick", "Augenblicke", "", "", "Jetzt", "", "Jetzt"));
        }
        UnitName::Second => ("Sekunde", "Sekunden"),
        UnitName::Minute => ("Minute", "Minuten"),
        UnitName::Hour => ("Stunde", "Stunden"),
        UnitName::Day => ("Tag", "Tagen"),
        UnitName::Week => ("Woche", "Wochen"),
        UnitName::Month => ("Monat", "Monaten"),
        UnitName::Year => ("Jahr", "Jahren"),
        UnitName::Decade => ("Jahrzehnt", "Jahrzehnten"),
        UnitName::Century => ("Jahrhundert", "Jahrhunderten"),
        UnitName::Custom(_) => return None,
    };
    Some(template(singular, plural, "%n %u", "in", "", "vor", ""))
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Scope
    // -----
    // These tests cover:
    // - Completeness of the default locale over every built-in unit.
    // - Exact-tag routing (regioned tags miss; base languages hit).
    //
    // They intentionally DO NOT cover:
    // - Fallback ordering or caching (tested in `locale::resolver`).
    // -------------------------------------------------------------------------

    const BUILT_INS: [UnitName; 10] = [
        UnitName::Moment,
        UnitName::Second,
        UnitName::Minute,
        UnitName::Hour,
        UnitName::Day,
        UnitName::Week,
        UnitName::Month,
        UnitName::Year,
        UnitName::Decade,
        UnitName::Century,
    ];

    #[test]
    // Purpose
    // -------
    // The default locale must resolve every built-in unit; anything less is
    // a configuration defect the resolver cannot recover from.
    fn default_locale_is_complete() {
        for name in BUILT_INS {
            assert!(
                lookup(DEFAULT_LOCALE, &name).is_some(),
                "default locale is missing '{name}'"
            );
        }
    }

    #[test]
    // Purpose
    // -------
    // Shipped non-default locales must also be complete for built-ins, and
    // no locale may carry resources for custom units.
    fn german_is_complete_and_custom_units_never_resolve() {
        for name in BUILT_INS {
            assert!(lookup("de", &name).is_some(), "German is missing '{name}'");
        }

        let custom = UnitName::Custom("tick".to_string());
        assert!(lookup("en", &custom).is_none());
        assert!(lookup("de", &custom).is_none());
    }

    #[test]
    // Purpose
    // -------
    // Tags match exactly at this layer: a regioned tag and an unknown
    // language both miss.
    fn lookup_matches_tags_exactly() {
        assert!(lookup("en-US", &UnitName::Minute).is_none());
        assert!(lookup("xx", &UnitName::Minute).is_none());
    }
}
