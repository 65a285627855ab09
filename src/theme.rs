use ratatui::style::{Color, Modifier, Style};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub header_logo: Style,
    pub header: Style,
    pub header_item: Style,

    pub input_text: Style,
    pub placeholder: Style,
    pub cursor: Style,
    pub enter_badge: Style,
    pub divider: Style,
    pub control: Style,
    pub filter_button: Style,
    pub filter_button_open: Style,

    pub bar_label: Style,
    pub pill: Style,
    pub pill_focus: Style,
    pub clear_all: Style,
    pub gradient: Style,

    pub chip: Style,
    pub chip_focus: Style,

    pub section_title: Style,
    pub suggestion_query: Style,
    pub suggestion_suffix: Style,
    pub quick_link: Style,
    pub quick_link_icon: Style,

    pub result_title: Style,
    pub result_body: Style,
    pub card: Style,
    pub related: Style,

    pub list_item: Style,
    pub list_selected: Style,
    pub dimmed: Style,

    pub footer: Style,
    pub footer_key: Style,
    pub footer_val: Style,
}

impl Default for Theme {
    fn default() -> Self {
        let accent = Color::Rgb(0, 135, 130); // Teal
        let accent_soft = Color::Rgb(215, 238, 236);
        let text = Color::Rgb(220, 220, 220);
        let muted = Color::Rgb(130, 130, 130);

        Self {
            border: Style::default().fg(Color::Rgb(80, 80, 80)),
            border_focus: Style::default().fg(accent),

            header_logo: Style::default()
                .bg(accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            header: Style::default().bg(Color::Rgb(40, 40, 40)).fg(Color::White),
            header_item: Style::default().bg(Color::Rgb(40, 40, 40)).fg(muted),

            input_text: Style::default().fg(text),
            placeholder: Style::default().fg(muted).add_modifier(Modifier::ITALIC),
            cursor: Style::default().add_modifier(Modifier::REVERSED),
            enter_badge: Style::default()
                .bg(Color::Rgb(60, 60, 60))
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            divider: Style::default().fg(Color::Rgb(80, 80, 80)),
            control: Style::default().fg(muted),
            filter_button: Style::default().fg(text),
            filter_button_open: Style::default()
                .fg(accent)
                .add_modifier(Modifier::BOLD),

            bar_label: Style::default().fg(muted),
            pill: Style::default().bg(accent_soft).fg(Color::Black),
            pill_focus: Style::default()
                .bg(accent)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            clear_all: Style::default()
                .fg(accent)
                .add_modifier(Modifier::UNDERLINED),
            gradient: Style::default().fg(muted).add_modifier(Modifier::DIM),

            chip: Style::default().bg(Color::Rgb(50, 50, 50)).fg(text),
            chip_focus: Style::default()
                .bg(accent)
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            section_title: Style::default()
                .fg(muted)
                .add_modifier(Modifier::BOLD),
            suggestion_query: Style::default().fg(text).add_modifier(Modifier::BOLD),
            suggestion_suffix: Style::default().fg(text),
            quick_link: Style::default().fg(text),
            quick_link_icon: Style::default().fg(accent),

            result_title: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            result_body: Style::default().fg(text),
            card: Style::default().fg(accent),
            related: Style::default().fg(accent).add_modifier(Modifier::UNDERLINED),

            list_item: Style::default().fg(text),
            list_selected: Style::default()
                .bg(Color::Rgb(50, 50, 50))
                .add_modifier(Modifier::BOLD),
            dimmed: Style::default().fg(muted).add_modifier(Modifier::DIM),

            footer: Style::default()
                .bg(Color::Rgb(30, 30, 30))
                .fg(Color::Rgb(150, 150, 150)),
            footer_key: Style::default()
                .bg(Color::Rgb(30, 30, 30))
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
            footer_val: Style::default()
                .bg(Color::Rgb(30, 30, 30))
                .fg(Color::Rgb(150, 150, 150)),
        }
    }
}
