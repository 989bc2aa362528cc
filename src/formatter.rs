//! Rendering of duration sequences into humanized phrases.
//!
//! Purpose
//! -------
//! Turn decomposed [`Duration`] values into strings: substitute quantities
//! and grammatically correct unit names into the template pattern, apply the
//! rounding tolerance, and wrap the result with the sign-appropriate
//! prefix/suffix slots.
//!
//! Key behaviors
//! -------------
//! - Render a single duration as a decorated phrase with tolerance rounding
//!   (`"2 hours ago"` for a truncated 1 hour 49 minutes).
//! - Render a duration sequence as undecorated space-joined fragments —
//!   only the terminal fragment is rounded — wrapped once with the
//!   prefix/suffix of the first (coarsest) duration's template.
//! - Prefer a unit's explicit template; consult the locale resolver only for
//!   default-templated units.
//! - Normalize decoration whitespace (collapse runs, trim) so template
//!   authors need not be pixel-exact about separating spaces.
//!
//! Invariants & assumptions
//! ------------------------
//! - All durations of one sequence share a sign; the first duration's sign
//!   picks the future or past slots for the whole phrase.
//! - Magnitude exactly 1 renders the singular name, every other magnitude
//!   (including 0) the plural.
//! - These are pure functions of their inputs plus the resolver's cache; no
//!   I/O, no logging, no internal state.

use crate::{
    core::durations::Duration,
    errors::{FormatError, FormatResult},
    locale::{resolver::LocaleResolver, templates::LocaleTemplate},
};

/// Render one duration as a complete decorated phrase, applying its
/// template's rounding tolerance.
pub fn format_single(duration: &Duration, resolver: &LocaleResolver) -> FormatResult<String> {
    let template = template_for(duration, resolver)?;
    let quantity = duration.quantity_rounded(template.rounding_tolerance);
    let fragment = render_fragment(&template, quantity);
    Ok(decorate(&template, &fragment, duration.is_in_future()))
}

/// Render a sequence as space-joined fragments wrapped once with the first
/// duration's prefix/suffix. Intermediate fragments show exact quantities;
/// the terminal fragment is rounded.
///
/// Errors
/// ------
/// - `FormatError::EmptyDurations` for an empty sequence.
/// - `FormatError::MissingResource` when a default-templated unit cannot be
///   resolved in the active locale chain.
pub fn format_durations(
    durations: &[Duration], resolver: &LocaleResolver,
) -> FormatResult<String> {
    let Some(head) = durations.first() else {
        return Err(FormatError::EmptyDurations);
    };

    let mut fragments = Vec::with_capacity(durations.len());
    for (index, duration) in durations.iter().enumerate() {
        let template = template_for(duration, resolver)?;
        let quantity = if index == durations.len() - 1 {
            duration.quantity_rounded(template.rounding_tolerance)
        } else {
            duration.quantity
        };
        fragments.push(render_fragment(&template, quantity));
    }

    let head_template = template_for(head, resolver)?;
    Ok(decorate(&head_template, &fragments.join(" "), head.is_in_future()))
}

/// Explicit template when the unit carries one, locale resolution otherwise.
fn template_for(duration: &Duration, resolver: &LocaleResolver) -> FormatResult<LocaleTemplate> {
    match &duration.unit.template {
        Some(template) => Ok(template.clone()),
        None => resolver.resolve(&duration.unit.name),
    }
}

/// Substitute `%n` (absolute quantity) and `%u` (singular/plural name) into
/// the template pattern.
fn render_fragment(template: &LocaleTemplate, quantity: i64) -> String {
    template
        .pattern
        .replace("%n", &quantity.abs().to_string())
        .replace("%u", template.name_for(quantity))
}

/// Wrap a fragment with the sign-appropriate prefix/suffix, then collapse
/// whitespace runs and trim.
fn decorate(template: &LocaleTemplate, fragment: &str, future: bool) -> String {
    let (prefix, suffix) = if future {
        (&template.future_prefix, &template.future_suffix)
    } else {
        (&template.past_prefix, &template.past_suffix)
    };
    normalize(&format!("{prefix} {fragment} {suffix}"))
}

/// Collapse interior whitespace runs to single spaces and trim the ends.
fn normalize(phrase: &str) -> String {
    phrase.split_whitespace().collect::<Vec<_>>().join(" ")
}
