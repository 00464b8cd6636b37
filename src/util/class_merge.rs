//! Conditional class composition with utility-conflict resolution.
//!
//! `merge_class_fragments` joins class fragments in order. When two utility
//! classes set the same property under the same variant prefix (`px-2` then
//! `px-4`, `hover:bg-white` then `hover:bg-slate-900`), the later one wins and
//! the earlier one is dropped. Shorthands also displace the longhands they
//! cover: `p-4` after `px-2` drops `px-2`, but `px-2` after `p-4` keeps both.
//! Classes outside the known utility groups only collapse with exact
//! duplicates, so BEM names like `card card--active` pass through untouched.

#[cfg(test)]
#[path = "class_merge_test.rs"]
mod class_merge_test;

/// A fragment that is present only when `condition` holds.
pub fn when(condition: bool, classes: &str) -> Option<&str> {
    condition.then_some(classes)
}

/// Merge class fragments into one class attribute value.
///
/// `None` fragments are skipped; each fragment may hold several
/// whitespace-separated classes.
pub fn merge_class_fragments<'a>(fragments: impl IntoIterator<Item = Option<&'a str>>) -> String {
    let mut kept: Vec<(&'a str, ConflictKey<'a>)> = Vec::new();

    for class in fragments.into_iter().flatten().flat_map(str::split_whitespace) {
        let key = ConflictKey::of(class);
        kept.retain(|(_, existing)| !key.displaces(existing));
        kept.push((class, key));
    }

    let mut out = String::new();
    for (i, (class, _)) in kept.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        out.push_str(class);
    }
    out
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct ConflictKey<'a> {
    /// Variant prefix including the trailing colon, e.g. `"md:hover:"`.
    variants: &'a str,
    important: bool,
    group: Group<'a>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Group<'a> {
    Utility(&'static str),
    Exact(&'a str),
}

impl<'a> ConflictKey<'a> {
    fn of(class: &'a str) -> Self {
        let (variants, base) = match class.rfind(':') {
            Some(idx) => class.split_at(idx + 1),
            None => ("", class),
        };
        let (important, base) = match base.strip_prefix('!') {
            Some(rest) => (true, rest),
            None => (false, base),
        };
        let unsigned = base.strip_prefix('-').unwrap_or(base);
        let group = utility_group(unsigned).map_or(Group::Exact(class), Group::Utility);
        Self { variants, important, group }
    }

    /// Whether a class with this key removes an earlier class with `earlier`.
    fn displaces(&self, earlier: &ConflictKey<'a>) -> bool {
        if self.variants != earlier.variants || self.important != earlier.important {
            return false;
        }
        match (self.group, earlier.group) {
            (Group::Exact(a), Group::Exact(b)) => a == b,
            (Group::Utility(a), Group::Utility(b)) => a == b || covered_groups(a).contains(&b),
            _ => false,
        }
    }
}

const FONT_SIZES: &[&str] = &[
    "xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];
const TEXT_ALIGN: &[&str] = &["left", "center", "right", "justify", "start", "end"];
const FONT_WEIGHTS: &[&str] = &[
    "thin", "extralight", "light", "normal", "medium", "semibold", "bold", "extrabold", "black",
];
const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];
const FONT_FAMILIES: &[&str] = &["sans", "serif", "mono"];
const BG_POSITIONS: &[&str] = &[
    "bottom", "center", "left", "left-bottom", "left-top", "right", "right-bottom", "right-top", "top",
];
const BG_REPEATS: &[&str] = &["repeat", "no-repeat", "repeat-x", "repeat-y", "repeat-round", "repeat-space"];
const NAMED_COLORS: &[&str] = &["white", "black", "transparent", "current", "inherit"];

/// Longhand groups a shorthand group overrides.
fn covered_groups(group: &str) -> &'static [&'static str] {
    match group {
        "p" => &["px", "py", "pt", "pr", "pb", "pl", "ps", "pe"],
        "px" => &["pr", "pl", "ps", "pe"],
        "py" => &["pt", "pb"],
        "m" => &["mx", "my", "mt", "mr", "mb", "ml", "ms", "me"],
        "mx" => &["mr", "ml", "ms", "me"],
        "my" => &["mt", "mb"],
        "size" => &["w", "h"],
        "gap" => &["gap-x", "gap-y"],
        "inset" => &["inset-x", "inset-y", "top", "right", "bottom", "left"],
        "inset-x" => &["right", "left"],
        "inset-y" => &["top", "bottom"],
        "overflow" => &["overflow-x", "overflow-y"],
        "rounded" => &[
            "rounded-t", "rounded-r", "rounded-b", "rounded-l", "rounded-tl", "rounded-tr", "rounded-br", "rounded-bl",
        ],
        "rounded-t" => &["rounded-tl", "rounded-tr"],
        "rounded-r" => &["rounded-tr", "rounded-br"],
        "rounded-b" => &["rounded-br", "rounded-bl"],
        "rounded-l" => &["rounded-tl", "rounded-bl"],
        "border-w" => &["border-w-x", "border-w-y", "border-w-t", "border-w-r", "border-w-b", "border-w-l"],
        _ => &[],
    }
}

fn is_number(raw: &str) -> bool {
    !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit())
}

/// Palette colors (`slate-200`, `white`, `red-500/50`) and arbitrary hex or rgb values.
fn is_color(value: &str) -> bool {
    let value = value.split_once('/').map_or(value, |(color, _)| color);
    if NAMED_COLORS.contains(&value) {
        return true;
    }
    if let Some(arbitrary) = value.strip_prefix('[') {
        return arbitrary.starts_with('#') || arbitrary.starts_with("rgb") || arbitrary.starts_with("hsl");
    }
    match value.split_once('-') {
        Some((name, shade)) => !name.is_empty() && name.bytes().all(|b| b.is_ascii_lowercase()) && is_number(shade),
        None => false,
    }
}

/// Utility group for an unprefixed class, or `None` for non-utility classes.
fn utility_group(base: &str) -> Option<&'static str> {
    let group = match base {
        "block" | "inline-block" | "inline" | "flex" | "inline-flex" | "grid" | "inline-grid" | "hidden"
        | "contents" | "table" | "flow-root" => "display",
        "static" | "fixed" | "absolute" | "relative" | "sticky" => "position",
        "visible" | "invisible" | "collapse" => "visibility",
        "underline" | "overline" | "line-through" | "no-underline" => "text-decoration",
        "uppercase" | "lowercase" | "capitalize" | "normal-case" => "text-transform",
        "italic" | "not-italic" => "font-style",
        "truncate" => "text-overflow",
        "flex-row" | "flex-row-reverse" | "flex-col" | "flex-col-reverse" => "flex-direction",
        "flex-wrap" | "flex-nowrap" | "flex-wrap-reverse" => "flex-wrap",
        "shadow" => "shadow",
        "rounded" => "rounded",
        "border" => "border-w",
        "ring" => "ring-w",
        _ => return prefixed_group(base),
    };
    Some(group)
}

fn prefixed_group(base: &str) -> Option<&'static str> {
    let (prefix, value) = base.split_once('-')?;
    let group = match prefix {
        "p" | "px" | "py" | "pt" | "pr" | "pb" | "pl" | "ps" | "pe" | "m" | "mx" | "my" | "mt" | "mr" | "mb"
        | "ml" | "ms" | "me" | "w" | "h" | "size" | "z" | "top" | "right" | "bottom" | "left" | "order"
        | "opacity" | "cursor" | "leading" | "tracking" | "basis" | "grow" | "shrink" | "whitespace"
        | "select" => static_prefix(prefix),
        "text" if FONT_SIZES.contains(&value) => "font-size",
        "text" if TEXT_ALIGN.contains(&value) => "text-align",
        "text" if matches!(value, "ellipsis" | "clip") => "text-overflow",
        "text" if matches!(value, "wrap" | "nowrap" | "balance" | "pretty") => "text-wrap",
        "text" if is_color(value) => "text-color",
        "font" if FONT_WEIGHTS.contains(&value) => "font-weight",
        "font" if FONT_FAMILIES.contains(&value) => "font-family",
        "bg" if value.starts_with("gradient") || value == "none" => "bg-image",
        "bg" if matches!(value, "auto" | "cover" | "contain") => "bg-size",
        "bg" if BG_POSITIONS.contains(&value) => "bg-position",
        "bg" if BG_REPEATS.contains(&value) => "bg-repeat",
        "bg" if matches!(value, "fixed" | "local" | "scroll") => "bg-attachment",
        "bg" if is_color(value) => "bg-color",
        "shadow" => "shadow",
        "justify" => "justify-content",
        "items" => "align-items",
        "self" => "align-self",
        "content" => "align-content",
        "inset" => match value.split_once('-') {
            Some(("x", _)) => "inset-x",
            Some(("y", _)) => "inset-y",
            _ => "inset",
        },
        "gap" => match value.split_once('-') {
            Some(("x", _)) => "gap-x",
            Some(("y", _)) => "gap-y",
            _ => "gap",
        },
        "overflow" => match value.split_once('-') {
            Some(("x", _)) => "overflow-x",
            Some(("y", _)) => "overflow-y",
            _ => "overflow",
        },
        "min" => match value.split_once('-') {
            Some(("w", _)) => "min-w",
            Some(("h", _)) => "min-h",
            _ => return None,
        },
        "max" => match value.split_once('-') {
            Some(("w", _)) => "max-w",
            Some(("h", _)) => "max-h",
            _ => return None,
        },
        "grid" => match value.split_once('-') {
            Some(("cols", _)) => "grid-cols",
            Some(("rows", _)) => "grid-rows",
            _ => return None,
        },
        "col" => "col",
        "rounded" => rounded_group(value),
        "border" => return border_group(value),
        "ring" => return ring_group(value),
        _ => return None,
    };
    Some(group)
}

fn static_prefix(prefix: &str) -> &'static str {
    match prefix {
        "p" => "p",
        "px" => "px",
        "py" => "py",
        "pt" => "pt",
        "pr" => "pr",
        "pb" => "pb",
        "pl" => "pl",
        "ps" => "ps",
        "pe" => "pe",
        "m" => "m",
        "mx" => "mx",
        "my" => "my",
        "mt" => "mt",
        "mr" => "mr",
        "mb" => "mb",
        "ml" => "ml",
        "ms" => "ms",
        "me" => "me",
        "w" => "w",
        "h" => "h",
        "size" => "size",
        "z" => "z",
        "top" => "top",
        "right" => "right",
        "bottom" => "bottom",
        "left" => "left",
        "order" => "order",
        "opacity" => "opacity",
        "cursor" => "cursor",
        "leading" => "leading",
        "tracking" => "tracking",
        "basis" => "basis",
        "grow" => "grow",
        "shrink" => "shrink",
        "whitespace" => "whitespace",
        _ => "select",
    }
}

fn rounded_group(value: &str) -> &'static str {
    let side = value.split_once('-').map_or(value, |(side, _)| side);
    match side {
        "t" => "rounded-t",
        "r" => "rounded-r",
        "b" => "rounded-b",
        "l" => "rounded-l",
        "tl" => "rounded-tl",
        "tr" => "rounded-tr",
        "br" => "rounded-br",
        "bl" => "rounded-bl",
        _ => "rounded",
    }
}

fn ring_group(value: &str) -> Option<&'static str> {
    if is_number(value) {
        return Some("ring-w");
    }
    if let Some(offset) = value.strip_prefix("offset-") {
        return if is_number(offset) {
            Some("ring-offset-w")
        } else if is_color(offset) {
            Some("ring-offset-color")
        } else {
            None
        };
    }
    is_color(value).then_some("ring-color")
}

fn border_group(value: &str) -> Option<&'static str> {
    if is_number(value) {
        return Some("border-w");
    }
    if BORDER_STYLES.contains(&value) {
        return Some("border-style");
    }
    if matches!(value, "collapse" | "separate") {
        return Some("border-collapse");
    }
    let (side, rest) = value.split_once('-').unwrap_or((value, ""));
    let sided = match side {
        "x" => Some("border-w-x"),
        "y" => Some("border-w-y"),
        "t" => Some("border-w-t"),
        "r" => Some("border-w-r"),
        "b" => Some("border-w-b"),
        "l" => Some("border-w-l"),
        _ => None,
    };
    match sided {
        Some(group) if rest.is_empty() || is_number(rest) => Some(group),
        Some(_) => None,
        None => is_color(value).then_some("border-color"),
    }
}
