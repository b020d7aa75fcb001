//! Converter Light - light variant of the default theme

pub const THEME: &str = r##"# Converter Light theme for generic-converter

[meta]
name = "Converter Light"
version = 1
author = "generic-converter"

[ui]
background = "#faf6f0"
foreground = "#5c5650"
border = "#cdc4b8"
border_focused = "#c4784a"
title = "#c4784a"
status_bar = "#857c72"
selection_bg = "#ede6db"
selection_fg = "#3d3834"
muted = "#857c72"
border_type = "rounded"

[form]
button = "#3f7f79"
button_fg = "#faf6f0"
result = "#5d7a2f"
error = "#b0463a"
"##;
