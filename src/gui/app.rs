// iced GUI application for linkhub

use std::time::Duration;

use iced::keyboard::{self, Key};
use iced::widget::{
    button, center, column, container, mouse_area, opaque, row, scrollable, stack, text, Column, Space,
};
use iced::{Alignment, Color, Element, Length, Subscription, Task, Theme};

use crate::shared::links::{CONTACT_TITLE, TITLE, WELCOME};
use crate::shared::{
    copy_to_clipboard, open_link, Config, ContactEntry, DarkClass, EnvColorScheme, LinkAction,
    NotificationCenter, NotificationKind, SystemClipboard, ThemeController, ThemePreference,
};

use super::message::Message;
use super::theme::{card_button, get_iced_theme, icon_button, surface_style, HubColors};
use super::toast::{view_toast, IcedScheduler};

const FONT_SIZE: u16 = 16;
const TITLE_SIZE: u16 = 24;
const SMALL_SIZE: u16 = 14;
const MAX_WIDTH: f32 = 448.0;

/// How often `System` re-samples the OS color scheme.
const THEME_REFRESH: Duration = Duration::from_secs(1);

pub struct LinkhubGui {
    config: Config,
    theme: ThemeController<EnvColorScheme, DarkClass>,
    notifications: NotificationCenter<IcedScheduler>,
    clipboard: SystemClipboard,
    contact_open: bool,
}

impl LinkhubGui {
    pub fn new() -> (Self, Task<Message>) {
        let config = Config::load();
        let theme = ThemeController::new(config.theme, EnvColorScheme, DarkClass::default());

        let app = Self {
            config,
            theme,
            notifications: NotificationCenter::new(IcedScheduler::default()),
            clipboard: SystemClipboard::new(),
            contact_open: false,
        };

        (app, Task::none())
    }

    pub fn title(&self) -> String {
        TITLE.to_string()
    }

    pub fn theme(&self) -> Theme {
        get_iced_theme(self.is_dark())
    }

    fn is_dark(&self) -> bool {
        self.theme.sink().is_dark()
    }

    fn colors(&self) -> HubColors {
        HubColors::from_dark(self.is_dark())
    }

    fn open_url(&mut self, url: &str) {
        if let Err(err) = open_link(url) {
            log::warn!("{}", err);
            self.notifications.notify(err.to_string(), NotificationKind::Error);
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::OpenLink(idx) => {
                if let Some(link) = self.config.links.get(idx) {
                    match link.action {
                        LinkAction::ShowContact => self.contact_open = true,
                        LinkAction::OpenUrl => {
                            let url = link.url.clone();
                            self.open_url(&url);
                        }
                    }
                }
            }
            Message::OpenShortcut(idx) => {
                if let Some(url) = self.config.shortcuts.get(idx).map(|s| s.url.clone()) {
                    self.open_url(&url);
                }
            }
            Message::SetTheme(preference) => {
                self.theme.set_preference(preference);
            }
            Message::ThemeTick => {
                self.theme.refresh();
            }
            Message::CloseContact => {
                self.contact_open = false;
            }
            Message::Copy(value) => {
                copy_to_clipboard(&mut self.clipboard, &value, &mut self.notifications);
            }
            Message::DismissToast => {
                self.notifications.dismiss();
            }
            Message::ToastExpired(id) => {
                self.notifications.expire(id);
            }
            Message::KeyPressed(key, modifiers) => {
                self.handle_key(key, modifiers);
            }
        }

        // Hand any timer armed above to the runtime
        self.notifications.scheduler_mut().take_tasks()
    }

    fn handle_key(&mut self, key: Key, modifiers: keyboard::Modifiers) {
        match key.as_ref() {
            Key::Named(keyboard::key::Named::Escape) => {
                if self.contact_open {
                    self.contact_open = false;
                } else {
                    self.notifications.dismiss();
                }
            }
            Key::Character("t") if !modifiers.control() => {
                self.theme.set_preference(self.theme.preference().cycle());
            }
            _ => {}
        }
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let keyboard_sub = keyboard::on_key_press(|key, modifiers| {
            Some(Message::KeyPressed(key, modifiers))
        });

        // Only System depends on the OS, so only then poll it
        let theme_sub = if self.theme.preference() == ThemePreference::System {
            iced::time::every(THEME_REFRESH).map(|_| Message::ThemeTick)
        } else {
            Subscription::none()
        };

        Subscription::batch([keyboard_sub, theme_sub])
    }

    pub fn view(&self) -> Element<'_, Message> {
        let colors = self.colors();

        let page = column![
            self.view_theme_switcher(),
            text(TITLE).size(TITLE_SIZE),
            text(WELCOME).size(SMALL_SIZE).color(colors.muted),
            self.view_shortcuts(),
            self.view_links(),
        ]
        .spacing(16)
        .padding(16)
        .max_width(MAX_WIDTH)
        .align_x(Alignment::Center);

        let base = container(scrollable(container(page).center_x(Length::Fill)))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_theme| container::Style {
                background: Some(colors.background.into()),
                text_color: Some(colors.foreground),
                ..Default::default()
            });

        let mut layers = stack![base];

        if self.contact_open {
            layers = layers.push(
                opaque(
                    mouse_area(center(opaque(self.view_contact())).style(|_theme| container::Style {
                        background: Some(Color { a: 0.6, ..Color::BLACK }.into()),
                        ..Default::default()
                    }))
                    .on_press(Message::CloseContact),
                ),
            );
        }

        let notification = self.notifications.snapshot();
        if notification.visible {
            layers = layers.push(view_toast(notification, colors));
        }

        layers.into()
    }

    fn view_theme_switcher(&self) -> Element<'_, Message> {
        let colors = self.colors();
        let current = self.theme.preference();

        let theme_btn = move |glyph: &'static str, preference: ThemePreference| {
            let selected = current == preference;
            button(text(glyph).size(18))
                .on_press(Message::SetTheme(preference))
                .padding([2, 6])
                .style(move |_theme, status| {
                    let mut style = icon_button(&colors, status);
                    if selected {
                        style.text_color = colors.accent;
                    }
                    style
                })
        };

        container(
            row![
                theme_btn("☀", ThemePreference::Light),
                theme_btn("☾", ThemePreference::Dark),
                theme_btn("🖥", ThemePreference::System),
            ]
            .spacing(4),
        )
        .align_right(Length::Fill)
        .into()
    }

    fn view_shortcuts(&self) -> Element<'_, Message> {
        let colors = self.colors();
        let buttons = self.config.shortcuts.iter().enumerate().map(|(idx, shortcut)| {
            button(text(shortcut.icon.glyph()).size(22))
                .on_press(Message::OpenShortcut(idx))
                .style(move |_theme, status| icon_button(&colors, status))
                .into()
        });

        row(buttons).spacing(16).into()
    }

    fn view_links(&self) -> Element<'_, Message> {
        let colors = self.colors();
        let cards = self.config.links.iter().enumerate().map(|(idx, link)| {
            button(
                row![
                    text(link.icon.glyph()).size(22),
                    text(link.label.as_str()).size(FONT_SIZE),
                ]
                .spacing(16)
                .align_y(Alignment::Center),
            )
            .on_press(Message::OpenLink(idx))
            .width(Length::Fill)
            .padding(16)
            .style(move |_theme, status| card_button(&colors, status))
            .into()
        });

        Column::with_children(cards).spacing(16).into()
    }

    fn view_contact(&self) -> Element<'_, Message> {
        let colors = self.colors();
        let contact = &self.config.contact;

        let copy_row = move |entry: &ContactEntry| -> Element<'static, Message> {
            row![
                text(entry.display.clone()).size(SMALL_SIZE),
                Space::with_width(Length::Fill),
                button(text("⧉").size(SMALL_SIZE).color(colors.accent))
                    .on_press(Message::Copy(entry.value.clone()))
                    .style(move |_theme, status| icon_button(&colors, status)),
            ]
            .align_y(Alignment::Center)
            .into()
        };

        let section = move |heading: &str, body: Element<'static, Message>| -> Element<'static, Message> {
            column![text(heading.to_string()).size(SMALL_SIZE).color(colors.accent), body]
                .spacing(6)
                .into()
        };

        let phones = Column::with_children(contact.phones.iter().map(copy_row)).spacing(6);
        let emails = Column::with_children(contact.emails.iter().map(copy_row)).spacing(6);
        let hours = Column::with_children(
            contact
                .hours
                .iter()
                .map(|line| text(line.clone()).size(SMALL_SIZE).into()),
        )
        .spacing(4);

        let header = row![
            text(format!("♡ {}", CONTACT_TITLE)).size(20),
            Space::with_width(Length::Fill),
            button(text("✕").size(SMALL_SIZE))
                .on_press(Message::CloseContact)
                .style(move |_theme, status| icon_button(&colors, status)),
        ]
        .align_y(Alignment::Center);

        let body = column![
            header,
            section(
                "អាសយដ្ឋាន៖",
                text(contact.address.clone()).size(SMALL_SIZE).color(colors.muted).into(),
            ),
            section("លេខទូរស័ព្ទ៖", phones.into()),
            section("អ៊ីមែល៖", emails.into()),
            section("ម៉ោងធ្វើការ៖", hours.into()),
        ]
        .spacing(16);

        container(body)
            .padding(24)
            .max_width(MAX_WIDTH)
            .style(move |_theme| surface_style(&colors, colors.border))
            .into()
    }
}
