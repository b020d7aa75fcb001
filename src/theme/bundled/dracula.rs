//! Dracula - dark theme with vivid accents

pub const THEME: &str = r##"# Dracula theme for generic-converter

[meta]
name = "Dracula"
version = 1
author = "iTerm2-Color-Schemes"

[ui]
background = "#282a36"
foreground = "#f8f8f2"
border = "#6272a4"
border_focused = "#ff79c6"
title = "#bd93f9"
status_bar = "#6272a4"
selection_bg = "#44475a"
selection_fg = "#f8f8f2"
muted = "#6272a4"
border_type = "double"

[form]
button = "#50fa7b"
button_fg = "#282a36"
result = "#8be9fd"
error = "#ff5555"
"##;
