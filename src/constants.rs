//! Application-wide constants
//!
//! Design defaults, fit tuning and the platform icon tables live here so the
//! renderer and driver never carry magic numbers of their own.

/// Iterative glyph-fit tuning
pub mod fit {
    /// Initial font size overshoot relative to the target box
    pub const OVERSHOOT_FACTOR: f64 = 1.05;

    /// Font size multiplier applied after each failed fit
    pub const SHRINK_FACTOR: f64 = 0.96;

    /// Upper bound on fit attempts before settling for the last size
    pub const MAX_ITERATIONS: u32 = 40;

    /// Smallest font size ever requested from the provider
    pub const MIN_FONT_SIZE: u32 = 1;
}

/// Built-in bitmap font metrics
pub mod builtin {
    /// Glyph cell width in pixels
    pub const GLYPH_WIDTH: usize = 5;

    /// Glyph cell height in pixels
    pub const GLYPH_HEIGHT: usize = 7;

    /// Horizontal advance between glyphs (cell plus one column of spacing)
    pub const ADVANCE: f32 = 6.0;
}

/// Configuration paths and filenames
pub mod config {
    /// Application directory name under XDG config
    pub const APP_DIR: &str = "glyph-icons";

    /// Design token filename
    pub const FILENAME: &str = "tokens.json";
}

/// Default design tokens
/// These are used when no token file exists or a field is missing from it
pub mod defaults {
    /// Near-black ink background
    pub const BACKGROUND: &str = "#080808";

    /// Warm newsprint off-white
    pub const FOREGROUND: &str = "#F0EADA";

    /// Fraction of the edge kept clear on each side
    pub const PADDING: f64 = 0.11;

    /// Glyph drawn on every icon
    pub const GLYPH: &str = "B";

    /// Drop shadow settings
    pub mod shadow {
        /// Warm shadow color, drawn opaque (`#AARRGGBB` opts into alpha)
        pub const COLOR: &str = "#B48C50";

        /// Icons smaller than this (in pixels) get no shadow
        pub const MIN_SIZE: u32 = 48;

        /// Shadow offset is `max(1, px / OFFSET_DIVISOR)`
        pub const OFFSET_DIVISOR: u32 = 96;
    }

    /// Preferred fonts (tried in order), bold serifs first.
    /// Entries with a path separator or font extension are files; the rest
    /// are family names resolved via fontconfig.
    pub const FONT_CANDIDATES: &[&str] = &[
        r"C:\Windows\Fonts\garabd.ttf",
        r"C:\Windows\Fonts\timesbd.ttf",
        r"C:\Windows\Fonts\georgiab.ttf",
        r"C:\Windows\Fonts\georgia.ttf",
        r"C:\Windows\Fonts\times.ttf",
        "EB Garamond Bold",
        "Liberation Serif Bold",
        "DejaVu Serif Bold",
        "Noto Serif Bold",
        "FreeSerif Bold",
    ];
}

/// Platform icon tables: (relative output path, edge length in pixels)
pub mod icons {
    pub const ANDROID: &[(&str, u32)] = &[
        ("android/app/src/main/res/mipmap-mdpi/ic_launcher.png", 48),
        ("android/app/src/main/res/mipmap-hdpi/ic_launcher.png", 72),
        ("android/app/src/main/res/mipmap-xhdpi/ic_launcher.png", 96),
        ("android/app/src/main/res/mipmap-xxhdpi/ic_launcher.png", 144),
        ("android/app/src/main/res/mipmap-xxxhdpi/ic_launcher.png", 192),
    ];

    pub const IOS: &[(&str, u32)] = &[
        ("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-20x20@1x.png", 20),
        ("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-20x20@2x.png", 40),
        ("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-20x20@3x.png", 60),
        ("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-29x29@1x.png", 29),
        ("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-29x29@2x.png", 58),
        ("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-29x29@3x.png", 87),
        ("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-40x40@1x.png", 40),
        ("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-40x40@2x.png", 80),
        ("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-40x40@3x.png", 120),
        ("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-60x60@2x.png", 120),
        ("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-60x60@3x.png", 180),
        ("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-76x76@1x.png", 76),
        ("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-76x76@2x.png", 152),
        ("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-83.5x83.5@2x.png", 167),
        ("ios/Runner/Assets.xcassets/AppIcon.appiconset/Icon-App-1024x1024@1x.png", 1024),
    ];
}
