//! Converter Dark - default theme
//! Warm amber accents on a charcoal form

pub const THEME: &str = r##"# Converter Dark theme for generic-converter

[meta]
name = "Converter Dark"
version = 1
author = "generic-converter"

[ui]
background = "#28292d"
foreground = "#d4cfc9"
border = "#3a3b40"
border_focused = "#c9a66b"
title = "#c9a66b"
status_bar = "#8a8279"
selection_bg = "#3d3834"
selection_fg = "#e8e4df"
muted = "#8a8279"
border_type = "rounded"

[form]
button = "#5da9a1"
button_fg = "#1c1d20"
result = "#8fad5c"
error = "#c75f4a"
"##;
