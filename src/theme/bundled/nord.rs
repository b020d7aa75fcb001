//! Nord - Arctic, bluish color palette

pub const THEME: &str = r##"# Nord theme for generic-converter
# Arctic, bluish color palette

[meta]
name = "Nord"
version = 1
author = "iTerm2-Color-Schemes"

[ui]
background = "#2e3440"
foreground = "#d8dee9"
border = "#4c566a"
border_focused = "#ebcb8b"
title = "#88c0d0"
status_bar = "#d8dee9"
selection_bg = "#eceff4"
selection_fg = "#2e3440"

[form]
button = "#81a1c1"
button_fg = "#2e3440"
result = "#a3be8c"
error = "#bf616a"
"##;
