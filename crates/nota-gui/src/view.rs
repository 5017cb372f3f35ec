use crate::fonts::FontChoice;
use crate::message::Message;
use crate::state::EditorState;
use iced::alignment::Vertical;
use iced::widget::{
    button, column, container, pick_list, row, text, text_editor, text_input,
};
use iced::{theme, Alignment, Element, Length};

pub fn view(state: &EditorState) -> Element<'_, Message> {
    let file_controls = row![
        button(text("New").size(14)).on_press(Message::NewFileRequested),
        button(text("Open…").size(14)).on_press(Message::OpenFileRequested),
        button(text("Save").size(14)).on_press(Message::SaveRequested),
        button(text("Save As…").size(14)).on_press(Message::SaveAsRequested),
        button(text("Exit").size(14)).on_press(Message::ExitRequested),
    ]
    .spacing(8);

    let edit_controls = row![
        button(text("Cut").size(14)).on_press(Message::Cut),
        button(text("Copy").size(14)).on_press(Message::Copy),
        button(text("Paste").size(14)).on_press(Message::Paste),
        button(text("Select All").size(14)).on_press(Message::SelectAll),
    ]
    .spacing(8);

    let find_label = if state.find_open() {
        "Hide Find"
    } else {
        "Find…"
    };

    let view_controls = row![
        button(text(find_label).size(14)).on_press(Message::FindToggled),
        button(text("Status Bar").size(14)).on_press(Message::StatusBarToggled),
    ]
    .spacing(8);

    let font_controls = row![
        pick_list(FontChoice::ALL, Some(state.font()), Message::FontFamilyPicked)
            .text_size(14),
        text_input("Size", state.font_size_input())
            .on_input(Message::FontSizeInputChanged)
            .on_submit(Message::FontSizeSubmitted)
            .size(14)
            .width(Length::Fixed(64.0)),
    ]
    .spacing(8)
    .align_items(Alignment::Center);

    let mut toolbar = row![file_controls, edit_controls, view_controls, font_controls]
        .spacing(24)
        .align_items(Alignment::Center);

    let recent = state.recent_files();
    if !recent.is_empty() {
        toolbar = toolbar.push(
            pick_list(recent, None::<String>, Message::RecentFileSelected)
                .placeholder("Recent Files")
                .text_size(14),
        );
    }

    let top_bar = container(toolbar)
        .padding([12, 16])
        .width(Length::Fill)
        .style(theme::Container::Box);

    let editor = text_editor::TextEditor::new(state.buffer_content())
        .on_action(Message::BufferAction)
        .font(state.font().iced_font())
        .size(f32::from(state.font_size()))
        .height(Length::Fill)
        .padding(12);

    let editor_panel = container(editor)
        .padding(4)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(theme::Container::Box);

    let mut layout = column![top_bar].spacing(12).width(Length::Fill).height(Length::Fill);

    if state.find_open() {
        layout = layout.push(find_bar(state));
    }

    layout = layout.push(editor_panel);

    if state.settings().show_status_bar {
        layout = layout.push(status_bar(state));
    }

    container(layout)
        .padding(8)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn find_bar(state: &EditorState) -> Element<'_, Message> {
    container(
        row![
            text_input("Find", state.find_input())
                .on_input(Message::FindInputChanged)
                .on_submit(Message::FindSubmitted)
                .size(14)
                .width(Length::Fixed(220.0)),
            button(text("Find All").size(14)).on_press(Message::FindSubmitted),
            text_input("Replace with", state.replace_input())
                .on_input(Message::ReplaceInputChanged)
                .on_submit(Message::ReplaceSubmitted)
                .size(14)
                .width(Length::Fixed(220.0)),
            button(text("Replace All").size(14)).on_press(Message::ReplaceSubmitted),
            text(state.match_summary()).size(14),
        ]
        .spacing(8)
        .align_items(Alignment::Center),
    )
    .padding([8, 16])
    .width(Length::Fill)
    .style(theme::Container::Box)
    .into()
}

fn status_bar(state: &EditorState) -> Element<'_, Message> {
    container(
        row![
            text(state.status_line()).size(14),
            text(format!("File: {}", state.file_label())).size(14),
            text(format!("Chars: {}", state.char_count())).size(14),
            if let Some(err) = state.error() {
                text(format!("Error: {}", err)).size(14)
            } else {
                text("").size(14)
            },
        ]
        .spacing(24)
        .align_items(Alignment::Center),
    )
    .padding([10, 16])
    .width(Length::Fill)
    .align_y(Vertical::Center)
    .into()
}
