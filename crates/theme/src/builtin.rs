use crate::{Color, NamedTheme, ThemeColors, ThemeVariants};

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::new(r, g, b)
}

pub fn get_builtin_themes() -> Vec<NamedTheme> {
    vec![
        NamedTheme {
            id: "default".into(),
            name: "Default".into(),
            is_builtin: true,
            variants: ThemeVariants {
                dark: Some(ThemeColors::default()),
                light: Some(ThemeColors {
                    bg: rgb(250, 250, 252),
                    dialog_bg: rgb(255, 255, 255),
                    fg: rgb(30, 30, 40),
                    accent: rgb(25, 118, 210),
                    muted: rgb(140, 140, 150),
                    success: rgb(46, 125, 50),
                    warning: rgb(239, 108, 0),
                    danger: rgb(211, 47, 47),
                    info: rgb(0, 131, 143),
                    border: rgb(200, 200, 210),
                    graph_line: rgb(25, 118, 210),
                }),
            },
        },
        NamedTheme {
            id: "nursery".into(),
            name: "Nursery".into(),
            is_builtin: true,
            variants: ThemeVariants {
                dark: Some(ThemeColors {
                    bg: rgb(26, 32, 44),         // #1a202c
                    dialog_bg: rgb(45, 55, 72),  // #2d3748
                    fg: rgb(237, 242, 247),      // #edf2f7
                    accent: rgb(144, 205, 244),  // #90cdf4
                    muted: rgb(160, 174, 192),   // #a0aec0
                    success: rgb(154, 230, 180), // #9ae6b4
                    warning: rgb(251, 211, 141), // #fbd38d
                    danger: rgb(254, 178, 178),  // #feb2b2
                    info: rgb(129, 230, 217),    // #81e6d9
                    border: rgb(74, 85, 104),    // #4a5568
                    graph_line: rgb(129, 230, 217),
                }),
                light: Some(ThemeColors {
                    bg: rgb(255, 255, 255),
                    dialog_bg: rgb(247, 250, 252), // #f7fafc
                    fg: rgb(17, 17, 17),           // #111111
                    accent: rgb(43, 108, 176),     // #2b6cb0
                    muted: rgb(113, 128, 150),     // #718096
                    success: rgb(198, 246, 213),   // #c6f6d5
                    warning: rgb(254, 235, 200),   // #feebc8
                    danger: rgb(254, 215, 215),    // #fed7d7
                    info: rgb(230, 255, 250),      // #e6fffa
                    border: rgb(226, 232, 240),    // #e2e8f0
                    graph_line: rgb(49, 130, 206), // #3182ce
                }),
            },
        },
    ]
}
