/// The page: chapter path, countdown and night sky composed in one context.

use crate::app::notice::Notice;
use crate::core::config;
use crate::core::types::*;
use crate::platform::renderer::Renderer;
use crate::runtime::ticker::Ticker;
use crate::schedule::chapter_path::{ChapterPath, OpenOutcome};
use crate::schedule::navigator::Navigator;
use crate::schedule::schedule_config::ScheduleConfig;
use crate::schedule::unlock::{compute_countdown_text, compute_unlocked_count};
use crate::sky::starfield::Starfield;
use chrono::{DateTime, Utc};

pub struct Page {
    schedule: ScheduleConfig,
    path: ChapterPath,
    sky: Starfield,
    navigator: Box<dyn Navigator>,

    countdown_line: String,
    countdown_ticker: Ticker,
    nodes_ticker: Ticker,
    notice: Option<Notice>,

    width: f64,
    height: f64,
    last_tick: Option<DateTime<Utc>>,
}

impl Page {
    pub fn new(schedule: ScheduleConfig, sky: Starfield, navigator: Box<dyn Navigator>) -> Self {
        let path = ChapterPath::new(&schedule);
        Self {
            schedule,
            path,
            sky,
            navigator,
            countdown_line: String::new(),
            countdown_ticker: Ticker::new(config::COUNTDOWN_REFRESH_MS),
            nodes_ticker: Ticker::new(config::NODE_REFRESH_MS),
            notice: None,
            width: 0.0,
            height: 0.0,
            last_tick: None,
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
        self.sky.resize(width, height);
        self.path.layout(width, height);
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    /// Fire due refreshes and advance animations to `now`.
    pub fn tick(&mut self, now: DateTime<Utc>) {
        if self.countdown_ticker.poll(now) {
            self.refresh_countdown(now);
        }
        if self.nodes_ticker.poll(now) {
            self.refresh_nodes(now);
        }
        for e in self.navigator.reap() {
            log::warn!("Chapter opener failed: {}", e);
            self.notice = Some(Notice::new(config::MSG_OPEN_FAILED));
        }

        let dt_ms = match self.last_tick {
            Some(prev) => ((now - prev).num_milliseconds() as f64).clamp(0.0, config::MAX_FRAME_DT_MS),
            None => 0.0,
        };
        self.last_tick = Some(now);

        self.path.update(dt_ms);
        if let Some(notice) = &mut self.notice {
            notice.update(dt_ms);
        }
    }

    /// Recompute the countdown line. Once the last node is open the path is
    /// brought up to date right away, so the line and the nodes agree.
    pub fn refresh_countdown(&mut self, now: DateTime<Utc>) {
        let total = self.schedule.total_nodes();
        if self.unlocked_count_at(now) >= total {
            if self.path.unlocked_count() < total {
                self.refresh_nodes(now);
            }
            self.countdown_line = config::MSG_ALL_UNLOCKED.to_string();
        } else {
            self.countdown_line =
                compute_countdown_text(now, self.schedule.start(), self.schedule.interval_ms());
        }
    }

    pub fn refresh_nodes(&mut self, now: DateTime<Utc>) {
        let unlocked = self.unlocked_count_at(now);
        log::debug!("Node refresh: {}/{} unlocked", unlocked, self.schedule.total_nodes());
        self.path.apply_node_states(unlocked);
    }

    fn unlocked_count_at(&self, now: DateTime<Utc>) -> usize {
        compute_unlocked_count(
            now,
            self.schedule.start(),
            self.schedule.interval_ms(),
            self.schedule.total_nodes(),
        )
    }

    pub fn countdown_line(&self) -> &str {
        &self.countdown_line
    }

    pub fn handle_pointer(&mut self, x: f64, y: f64) {
        if self.notice.is_none() {
            self.path.set_pointer(Vec2::new(x, y));
        }
    }

    /// A click dismisses a visible notice; otherwise it opens the node under it.
    pub fn handle_click(&mut self, x: f64, y: f64) {
        if self.notice.take().is_some() {
            return;
        }

        let Some(index) = self.path.hit_test(Vec2::new(x, y)) else {
            return;
        };

        match self.path.open_node(index, self.navigator.as_mut()) {
            Ok(OpenOutcome::Locked) => {
                self.notice = Some(Notice::new(config::MSG_NODE_LOCKED));
            }
            Ok(OpenOutcome::Navigated(link)) => {
                log::info!("Opened chapter {} ({})", index + 1, link);
            }
            Err(e) => {
                log::warn!("Failed to open chapter {}: {}", index + 1, e);
                self.notice = Some(Notice::new(&format!("Couldn't open chapter {}", index + 1)));
            }
        }
    }

    pub fn handle_key(&mut self, e: &KeyEvent) {
        if !e.pressed {
            return;
        }
        if e.keycode == keycode::ESCAPE || e.keycode == keycode::RETURN {
            self.notice = None;
        }
    }

    /// Sky first, then the countdown, the path and any notice on top.
    pub fn render(&mut self, renderer: &dyn Renderer) {
        self.sky.render_frame(renderer);

        let size = config::COUNTDOWN_FONT_SIZE;
        let w = renderer.text_width(&self.countdown_line, size);
        renderer.draw_text(
            (self.width - w) / 2.0,
            config::COUNTDOWN_TOP,
            &self.countdown_line,
            size,
            Color::from_hex(config::TEXT_PRIMARY, 1.0),
        );

        self.path.render(renderer);

        if let Some(notice) = &self.notice {
            notice.render(renderer, self.width, self.height);
        }
    }
}

#[cfg(test)]
impl Page {
    pub fn path(&self) -> &ChapterPath {
        &self.path
    }

    pub fn sky(&self) -> &Starfield {
        &self.sky
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }
}
