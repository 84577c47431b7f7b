//! Themes compiled into the binary.

use crate::{Color, FontSpec, Theme, ThemeVariant, UiColors};

/// Theme installed as active when a registry is created.
pub const DEFAULT_THEME_ID: &str = "default";

/// Minimal dark theme that is always available.
pub fn default_theme() -> Theme {
	Theme {
		aliases: vec!["dark".into()],
		..Theme::new(DEFAULT_THEME_ID)
	}
}

/// All built-in themes, default first.
pub fn builtin_themes() -> Vec<Theme> {
	vec![
		default_theme(),
		Theme {
			name: "paper".into(),
			variant: ThemeVariant::Light,
			aliases: vec!["light".into()],
			ui: UiColors {
				bg: Color::rgb(0xfd, 0xf6, 0xe3),
				fg: Color::rgb(0x3b, 0x3a, 0x36),
				cursor: Color::BLACK,
				selection: Color::rgb(0xee, 0xe8, 0xd5),
				gutter: Color::rgb(0x93, 0xa1, 0xa1),
				tab_active: Color::rgb(0xee, 0xe8, 0xd5),
				tab_inactive: Color::rgb(0xfd, 0xf6, 0xe3),
			},
			font: None,
		},
		Theme {
			name: "ember".into(),
			variant: ThemeVariant::Dark,
			aliases: Vec::new(),
			ui: UiColors {
				bg: Color::rgb(0x28, 0x28, 0x28),
				fg: Color::rgb(0xeb, 0xdb, 0xb2),
				cursor: Color::rgb(0xfe, 0x80, 0x19),
				selection: Color::rgb(0x50, 0x49, 0x45),
				gutter: Color::rgb(0x7c, 0x6f, 0x64),
				tab_active: Color::rgb(0x3c, 0x38, 0x36),
				tab_inactive: Color::rgb(0x1d, 0x20, 0x21),
			},
			font: Some(FontSpec {
				family: "monospace".into(),
				size: 13.0,
			}),
		},
	]
}
