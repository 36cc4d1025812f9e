//! Built-in table contents. Extended by hand as new source packs turn up.

/// Noise tokens stripped from archive names (compared lowercase).
pub const STOP_WORDS: &[&str] = &[
    "", "+", "-", "-diamond", "1", "1)", "2", "2)", "$5", "rewards", "rewards(1)", "diamond",
    "gridless", "(gridless)", "(gridless", "high", "high-res", "res", "part", "pt", "pt.",
    "pt.1", "pt.1)", "pt.2", "pt.2)", "pt.3", "psd", "pngs", "roll20", "roll20+tokens",
    "support", "tier", "tokens", "(tokens)", "transparent",
];

/// Per-file action rules as `(pattern, destination)` in match order.
pub const ACTIONS: &[(&str, &str)] = &[
    ("./*.jpg", "Maps/{MAPNAME}"),
    ("./*.png", "Maps/{MAPNAME}"),
    ("gridless/*.jpg", "Maps/{MAPNAME}"),
    ("*/*.jpg", "Maps/{MAPNAME}"),
    ("*/*.png", "Maps/{MAPNAME}"),
    ("__macosx/**", "{SKIP}"),
    ("**/roll20/**", "{SKIP}"),
    ("**/*.ds_store", "{SKIP}"),
    ("**/*.db", "{SKIP}"),
    ("**/*.pdf", "{SKIP}"),
    ("**/*.mp3", "{SKIP}"),
    ("**/*.zip", "{SKIP}"),
    // Trust that top-level high resolution renders are gridless.
    ("**/high resolution/*.jpg", "Maps/{MAPNAME}"),
    ("**/high resolution/*.png", "Maps/{MAPNAME}"),
    ("**/gridless/*.jpg", "Maps/{MAPNAME}"),
    ("**/gridless/*.jpeg", "Maps/{MAPNAME}"),
    ("**/high-res/gridless/*.png", "Maps/{MAPNAME}"),
    ("**/high res/gridless/*.png", "Maps/{MAPNAME}"),
    ("**/high res/gridless/attic/*.jpg", "Maps/{MAPNAME}"),
    ("**/high res/gridless/attic/*.png", "Maps/{MAPNAME}"),
    ("**/high res/gridless/basement/*.jpg", "Maps/{MAPNAME}"),
    ("**/high res/gridless/basement/*.png", "Maps/{MAPNAME}"),
    ("**/high res/gridless/floor 1/*.jpg", "Maps/{MAPNAME}"),
    ("**/high res/gridless/floor 1/*.png", "Maps/{MAPNAME}"),
    ("**/high res/gridless/floor 2/*.jpg", "Maps/{MAPNAME}"),
    ("**/high res/gridless/floor 2/*.png", "Maps/{MAPNAME}"),
    ("**/grid/*.jpg", "{SKIP}"),
    ("**/gridded/*.jpg", "{SKIP}"),
    ("**/creature tokens/*.png", "Creatures"),
    ("**/creature tokens/variants/*.png", "Creatures"),
    ("**/map tokens/*.png", "Maps/{MAPNAME}/Objects"),
    ("**/tokens/*.png", "Maps/{MAPNAME}/Objects"),
    ("**/tokens/*.jpg", "Maps/{MAPNAME}/Objects"),
];

/// Known map-directory signatures and the source pack they come from.
pub const LAYOUTS: &[(&str, &str)] = &[("./*.jpg;./*.psd;Objects/*.png", "patreon-drmapzo-diamond")];
