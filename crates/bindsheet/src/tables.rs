//! Static glyph and description tables.
//!
//! Every table is an ordered slice, so iteration (for the legend) always
//! follows declaration order and output is reproducible run to run.

/// Glyph for the Super key, shared by the modifier table and the `super_l` key.
pub const SUPER: &str = "❖";

/// An ordered, case-insensitive lookup table from raw tokens to display text.
///
/// Keys are stored already lowercased.
#[derive(Debug, Clone, Copy)]
pub struct SymbolTable {
    entries: &'static [(&'static str, &'static str)],
}

impl SymbolTable {
    pub const fn new(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self { entries }
    }

    /// Looks up `token` ignoring case.
    pub fn get(&self, token: &str) -> Option<&'static str> {
        let folded = token.to_lowercase();
        self.entries
            .iter()
            .find(|(key, _)| *key == folded)
            .map(|(_, value)| *value)
    }

    /// Returns the table's substitute for `token`, or `token` itself when absent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use bindsheet::tables::KEYS;
    ///
    /// assert_eq!(KEYS.substitute("Escape"), "⎋");
    /// assert_eq!(KEYS.substitute("Q"), "Q");
    /// ```
    pub fn substitute<'a>(&self, token: &'a str) -> &'a str {
        self.get(token).unwrap_or(token)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Modifier glyphs and names in bit order: entry `i` is bit `i` of a modmask.
#[derive(Debug, Clone, Copy)]
pub struct ModifierTable {
    entries: &'static [(&'static str, &'static str)],
    primary: usize,
}

impl ModifierTable {
    /// `primary` is the bit rendered first whenever it is held.
    pub const fn new(entries: &'static [(&'static str, &'static str)], primary: usize) -> Self {
        Self { entries, primary }
    }

    pub fn primary(&self) -> usize {
        self.primary
    }

    pub fn symbol(&self, bit: usize) -> Option<&'static str> {
        self.entries.get(bit).map(|(symbol, _)| *symbol)
    }

    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|(symbol, _)| *symbol)
    }

    /// `(glyph, name)` pairs in bit order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

// Bits: shift caps ctrl alt num mod3 super altgr
pub static MODIFIERS: ModifierTable = ModifierTable::new(
    &[
        ("⇧", "Shift"),
        ("⇪", "Caps lock"),
        ("^", "Control"),
        ("*", "Alt"),
        ("⇭", "Num Lock"),
        ("◇", "Meta"),
        (SUPER, "Super"),
        ("ᴳ", "Alt Gr"),
    ],
    6,
);

pub static ARGS: SymbolTable = SymbolTable::new(&[
    ("u", "up"),
    ("d", "down"),
    ("l", "left"),
    ("r", "right"),
    ("movewindow", "Moves window"),
    ("resizewindow", "Resizes window"),
]);

/// Dispatcher name to description template. Templates may use `{arg}` and `{description}`.
pub static DISPATCHERS: SymbolTable = SymbolTable::new(&[
    ("exec", "{description}"),
    ("killactive", "Closes window"),
    ("forcekillactive", "Kills window"),
    ("exit", "Exits hyprland"),
    ("togglesplit", "Changes split direction"),
    ("pseudo", "Toggle window span"),
    ("swapnext", "Swap with adjacent"),
    ("togglefloating", "Toggle float/tile"),
    ("resizeactive", "Resize to {arg}"),
    ("movefocus", "Move focus {arg}"),
    ("mouse", "{arg}"),
    ("workspace", "Goto workspace {arg}"),
    ("togglespecialworkspace", "Toggle special:{arg}"),
    ("movetoworkspace", "Move to workspace {arg}"),
    ("movetoworkspacesilent", "Send to {arg}"),
]);

pub static KEYS: SymbolTable = SymbolTable::new(&[
    ("delete", "⨯❭"),
    ("equal", "="),
    ("escape", "⎋"),
    ("period", "."),
    ("super_l", SUPER),
    ("tab", "⎹⮀⎸"),
    ("up", "▲"),
    ("down", "▼"),
    ("left", "◀"),
    ("right", "▶"),
    ("prev", "⇞"),
    ("next", "⇟"),
    ("home", "⤒"),
    ("end", "⤓"),
    ("mouse:272", "˙🖰"),
    ("mouse:273", "🖰˙"),
    ("mouse_up", "🖰⭫"),
    ("mouse_down", "🖰⭭"),
    ("xf86search", "⌕"),
    ("xf86audioraisevolume", "🠙🕨"),
    ("xf86audiolowervolume", "🠗🕨"),
    ("xf86audiomute", "×🕨"),
    ("xf86audiomicmute", "ˣ🎙"),
    ("xf86audionext", "⏭"),
    ("xf86audiopause", "⏸"),
    ("xf86audioplay", "⏯"),
    ("xf86audioprev", "⏮"),
    ("xf86monbrightnessup", "🠙☼"),
    ("xf86monbrightnessdown", "🠗☼"),
]);

/// Keys shown in the symbol legend, as `(key token, human name)`.
///
/// The glyph comes from [`KEYS`], so the legend can never disagree with
/// what the bindings render.
pub static KEY_LEGEND: &[(&str, &str)] = &[
    ("delete", "Delete"),
    ("escape", "Escape"),
    ("tab", "Tab"),
    ("up", "Up"),
    ("down", "Down"),
    ("left", "Left"),
    ("right", "Right"),
    ("prev", "Pgup"),
    ("next", "Pgdn"),
    ("home", "Home"),
    ("end", "End"),
    ("mouse:272", "Right click"),
    ("mouse:273", "Left click"),
    ("mouse_up", "Scroll-wheel up"),
    ("mouse_down", "Scroll-wheel down"),
    ("xf86search", "Search"),
    ("xf86audioraisevolume", "Raise vol"),
    ("xf86audiolowervolume", "Lower vol"),
    ("xf86audiomute", "Mute vol"),
    ("xf86audiomicmute", "Mute mic"),
    ("xf86audionext", "Next track"),
    ("xf86audiopause", "Pause track"),
    ("xf86audioplay", "Play track"),
    ("xf86audioprev", "Prev track"),
    ("xf86monbrightnessup", "Raise brightness"),
    ("xf86monbrightnessdown", "Lower brightness"),
];

/// Key glyphs starting with one of these are joined to the modifiers without a separator.
pub static NO_SEPARATOR_PREFIXES: &[&str] = &[" ", "⎹", "（", "˙"];

/// `(glyph, name)` for every legend key, in legend order.
pub fn key_legend() -> impl Iterator<Item = (&'static str, &'static str)> {
    KEY_LEGEND
        .iter()
        .map(|&(token, name)| (KEYS.get(token).unwrap_or(token), name))
}
