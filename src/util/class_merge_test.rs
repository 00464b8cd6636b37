use super::*;

fn merge(fragments: &[Option<&str>]) -> String {
    merge_class_fragments(fragments.iter().copied())
}

// =============================================================
// Fragment handling
// =============================================================

#[test]
fn joins_fragments_in_order() {
    assert_eq!(merge(&[Some("card"), Some("card--wide shadow")]), "card card--wide shadow");
}

#[test]
fn skips_none_and_blank_fragments() {
    assert_eq!(merge(&[None, Some("  "), Some("tab"), None]), "tab");
    assert_eq!(merge(&[]), "");
}

#[test]
fn when_includes_fragment_only_if_condition_holds() {
    assert_eq!(when(true, "tab--active"), Some("tab--active"));
    assert_eq!(when(false, "tab--active"), None);
    assert_eq!(merge(&[Some("tab"), when(false, "tab--active")]), "tab");
}

#[test]
fn collapses_exact_duplicates_to_last_position() {
    assert_eq!(merge(&[Some("a b"), Some("a")]), "b a");
}

// =============================================================
// Conflict resolution
// =============================================================

#[test]
fn later_conflicting_utility_wins() {
    assert_eq!(merge(&[Some("px-2 py-1"), Some("px-4")]), "py-1 px-4");
    assert_eq!(merge(&[Some("bg-white text-slate-900"), Some("bg-slate-900 text-white")]), "bg-slate-900 text-white");
    assert_eq!(merge(&[Some("block"), when(true, "hidden")]), "hidden");
}

#[test]
fn font_size_and_text_color_do_not_conflict() {
    assert_eq!(merge(&[Some("text-sm text-slate-500"), Some("text-lg")]), "text-slate-500 text-lg");
    assert_eq!(merge(&[Some("text-left"), Some("text-center text-red-600")]), "text-center text-red-600");
}

#[test]
fn shorthand_displaces_earlier_longhand_only() {
    assert_eq!(merge(&[Some("px-2 pt-1"), Some("p-4")]), "p-4");
    assert_eq!(merge(&[Some("p-4"), Some("px-2")]), "p-4 px-2");
    assert_eq!(merge(&[Some("mt-2 mb-2"), Some("my-6")]), "my-6");
}

#[test]
fn variants_scope_conflicts() {
    assert_eq!(merge(&[Some("bg-white hover:bg-slate-100"), Some("hover:bg-slate-200")]), "bg-white hover:bg-slate-200");
    assert_eq!(merge(&[Some("md:px-2 px-2"), Some("px-3")]), "md:px-2 px-3");
}

#[test]
fn important_modifier_scopes_conflicts() {
    assert_eq!(merge(&[Some("!px-2 px-3"), Some("px-4")]), "!px-2 px-4");
}

#[test]
fn negative_values_share_group() {
    assert_eq!(merge(&[Some("-mt-2"), Some("mt-4")]), "mt-4");
}

#[test]
fn border_width_style_and_color_are_separate() {
    assert_eq!(merge(&[Some("border border-dashed border-slate-200"), Some("border-2")]), "border-dashed border-slate-200 border-2");
    assert_eq!(merge(&[Some("border-slate-200"), Some("border-amber-400")]), "border-amber-400");
}

#[test]
fn font_weight_and_family_are_separate() {
    assert_eq!(merge(&[Some("font-mono font-normal"), Some("font-bold")]), "font-mono font-bold");
}

#[test]
fn rounded_shorthand_covers_sides() {
    assert_eq!(merge(&[Some("rounded-t-lg"), Some("rounded-md")]), "rounded-md");
    assert_eq!(merge(&[Some("rounded"), Some("rounded-full")]), "rounded-full");
}

#[test]
fn unknown_classes_pass_through() {
    assert_eq!(merge(&[Some("venue-card venue-card--featured"), Some("venue-card--compact")]), "venue-card venue-card--featured venue-card--compact");
}

#[test]
fn merging_is_deterministic() {
    let fragments = [Some("px-2 bg-white"), when(true, "px-3"), None, Some("rounded")];
    assert_eq!(merge(&fragments), merge(&fragments));
    assert_eq!(merge(&fragments), "bg-white px-3 rounded");
}

// =============================================================
// Same prefix, different property
// =============================================================

#[test]
fn background_size_position_and_repeat_keep_color() {
    assert_eq!(merge(&[Some("bg-white"), Some("bg-cover")]), "bg-white bg-cover");
    assert_eq!(merge(&[Some("bg-slate-100 bg-cover"), Some("bg-center bg-no-repeat")]), "bg-slate-100 bg-cover bg-center bg-no-repeat");
    assert_eq!(merge(&[Some("bg-contain bg-white"), Some("bg-cover bg-black")]), "bg-cover bg-black");
}

#[test]
fn ring_offset_is_separate_from_ring_color() {
    assert_eq!(merge(&[Some("ring-2 ring-blue-500"), Some("ring-offset-2")]), "ring-2 ring-blue-500 ring-offset-2");
    assert_eq!(merge(&[Some("ring-offset-2 ring-offset-white"), Some("ring-offset-4")]), "ring-offset-white ring-offset-4");
}

#[test]
fn corner_radius_does_not_displace_full_radius() {
    assert_eq!(merge(&[Some("rounded-lg"), Some("rounded-tl-none")]), "rounded-lg rounded-tl-none");
    assert_eq!(merge(&[Some("rounded-tl-none rounded-br-lg"), Some("rounded-md")]), "rounded-md");
    assert_eq!(merge(&[Some("rounded-tl-none rounded-bl-none"), Some("rounded-t-lg")]), "rounded-bl-none rounded-t-lg");
}

#[test]
fn text_overflow_and_wrap_keep_text_color() {
    assert_eq!(merge(&[Some("text-white"), Some("text-ellipsis")]), "text-white text-ellipsis");
    assert_eq!(merge(&[Some("text-white text-nowrap"), Some("text-wrap")]), "text-white text-wrap");
}

#[test]
fn border_collapse_keeps_border_color() {
    assert_eq!(merge(&[Some("border-slate-200"), Some("border-collapse")]), "border-slate-200 border-collapse");
}

#[test]
fn unrecognised_prefixed_values_only_collapse_with_duplicates() {
    assert_eq!(merge(&[Some("text-muted"), Some("text-slate-500")]), "text-muted text-slate-500");
    assert_eq!(merge(&[Some("bg-hero"), Some("bg-white bg-hero")]), "bg-white bg-hero");
}
