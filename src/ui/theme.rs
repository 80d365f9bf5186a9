use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // step counter
    pub secondary: Color, // pointer cell and top of stack
    pub comment: Color,   // gutters, hints, unrecognised cells
    pub success: Color,   // clean halt
    pub error: Color,     // `@` cells and step-limit halts
    pub keyword: Color,
    pub string: Color,
    pub number: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub current_line_bg: Color, // pointer row and status bar
    pub function: Color,
    pub type_name: Color,
    pub modified: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),
    secondary: Color::Rgb(250, 179, 135),
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(137, 180, 250), // heading changes and `#`
    string: Color::Rgb(166, 227, 161),  // `"` and string mode
    number: Color::Rgb(250, 179, 135),  // digits and stack values
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    current_line_bg: Color::Rgb(50, 50, 70),
    function: Color::Rgb(249, 226, 175),  // `.` and `,`
    type_name: Color::Rgb(148, 226, 213), // `p` and `g`
    modified: Color::Rgb(245, 194, 231),  // cells rewritten by `p`
};
