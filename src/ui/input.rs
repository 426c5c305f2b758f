use crate::data::{Day, MealTime};
use crate::ui::app::{App, Panel};
use crate::ui::filters::FilterIntent;
use crate::ui::options::OptionsIntent;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const PAGE: i32 = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
        app.request_quit();
        return;
    }

    let step = app.bill_step();
    let shift = key.modifiers.contains(KeyModifiers::SHIFT);

    match key.code {
        // Bill range slider
        KeyCode::Left if shift => app.dispatch_filter(FilterIntent::NudgeMax { delta: -step }),
        KeyCode::Right if shift => app.dispatch_filter(FilterIntent::NudgeMax { delta: step }),
        KeyCode::Left => app.dispatch_filter(FilterIntent::NudgeMin { delta: -step }),
        KeyCode::Right => app.dispatch_filter(FilterIntent::NudgeMin { delta: step }),
        KeyCode::Char('[') => app.dispatch_filter(FilterIntent::NudgeMax { delta: -step }),
        KeyCode::Char(']') => app.dispatch_filter(FilterIntent::NudgeMax { delta: step }),

        // Meal time and day checkboxes
        KeyCode::Char('l') => app.dispatch_filter(FilterIntent::ToggleTime(MealTime::Lunch)),
        KeyCode::Char('d') => app.dispatch_filter(FilterIntent::ToggleTime(MealTime::Dinner)),
        KeyCode::Char(ch @ '1'..='4') => {
            let idx = ch as usize - '1' as usize;
            app.dispatch_filter(FilterIntent::ToggleDay(Day::ALL[idx]));
        }
        KeyCode::Char('r') => app.reset_filters(),

        // Display options
        KeyCode::Char('c') => app.dispatch_options(OptionsIntent::CycleScatterColor),
        KeyCode::Char('s') => app.dispatch_options(OptionsIntent::ToggleSize),
        KeyCode::Char('p') => app.dispatch_options(OptionsIntent::CycleSplit),
        KeyCode::Char('m') => app.dispatch_options(OptionsIntent::CycleMetric),
        KeyCode::Char('v') => app.dispatch_options(OptionsIntent::ToggleDayCount),

        // Panels
        KeyCode::Tab => app.move_focus(1),
        KeyCode::BackTab => app.move_focus(-1),
        KeyCode::Enter | KeyCode::Char('f') => app.toggle_maximized(),
        KeyCode::Up if app.focus() == Panel::Table => app.scroll_table(-1),
        KeyCode::Down if app.focus() == Panel::Table => app.scroll_table(1),
        KeyCode::PageUp if app.focus() == Panel::Table => app.scroll_table(-PAGE),
        KeyCode::PageDown if app.focus() == Panel::Table => app.scroll_table(PAGE),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
