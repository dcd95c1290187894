//! Screen-level state for one athlete's evaluation history.
//!
//! Owns the fetched snapshot and the highlight selection; all chart
//! geometry is derived downstream on every render.

use club::{Client, ClubError, EvaluationRecord};
use data::chart::date;

use iced::widget::{center, container, text};
use iced::{Element, Length, Task};
use uuid::Uuid;

use crate::widget::chart::evaluation::{EvaluationChart, EvaluationChartEvent};

#[derive(Debug, Clone)]
pub enum Message {
    Fetched(Uuid, Result<Vec<EvaluationRecord>, ClubError>),
    Chart(EvaluationChartEvent),
}

impl From<EvaluationChartEvent> for Message {
    fn from(event: EvaluationChartEvent) -> Self {
        Message::Chart(event)
    }
}

pub enum Action {
    EvaluationSelected(EvaluationRecord),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Loading,
    Ready,
    Failed,
}

pub struct EvaluationHistory {
    athlete_id: String,
    records: Vec<EvaluationRecord>,
    highlighted: Option<String>,
    load_state: LoadState,
    // Results tagged with any other token arrived after a teardown or an
    // athlete switch and are dropped on the floor.
    fetch_token: Uuid,
    version: u64,
}

impl EvaluationHistory {
    pub fn new(client: &Client, athlete_id: impl Into<String>) -> (Self, Task<Message>) {
        let athlete_id = athlete_id.into();
        let fetch_token = Uuid::new_v4();

        let screen = Self {
            athlete_id,
            records: Vec::new(),
            highlighted: None,
            load_state: LoadState::Loading,
            fetch_token,
            version: 0,
        };

        let task = fetch(client.clone(), fetch_token);
        (screen, task)
    }

    /// Switching athletes resets the snapshot and invalidates any fetch
    /// still in flight.
    pub fn set_athlete(&mut self, client: &Client, athlete_id: impl Into<String>) -> Task<Message> {
        self.athlete_id = athlete_id.into();
        self.records.clear();
        self.highlighted = None;
        self.load_state = LoadState::Loading;
        self.fetch_token = Uuid::new_v4();
        self.version += 1;

        fetch(client.clone(), self.fetch_token)
    }

    pub fn highlight(&mut self, evaluation_id: Option<String>) {
        self.highlighted = evaluation_id;
        self.version += 1;
    }

    pub fn records(&self) -> &[EvaluationRecord] {
        &self.records
    }

    pub fn update(&mut self, message: Message) -> Option<Action> {
        match message {
            Message::Fetched(token, result) => {
                if token != self.fetch_token {
                    log::debug!("dropping stale evaluation fetch result");
                    return None;
                }

                match result {
                    Ok(all) => {
                        let mut records = club::evaluations_for_athlete(all, &self.athlete_id);
                        date::sort_by_date(&mut records);
                        log::info!(
                            "loaded {} evaluations for athlete {}",
                            records.len(),
                            self.athlete_id
                        );
                        self.records = records;
                        self.load_state = LoadState::Ready;
                    }
                    Err(err) => {
                        log::error!("evaluation fetch failed: {err}");
                        self.records.clear();
                        self.load_state = LoadState::Failed;
                    }
                }
                self.version += 1;

                None
            }
            Message::Chart(EvaluationChartEvent::PointPressed(record)) => {
                Some(Action::EvaluationSelected(record))
            }
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        match self.load_state {
            LoadState::Loading => center(text("Loading evaluations...").size(16)).into(),
            LoadState::Failed => {
                center(text("Could not load evaluations").size(16)).into()
            }
            LoadState::Ready if self.records.is_empty() => {
                center(text("No evaluations yet").size(16)).into()
            }
            LoadState::Ready => container(
                EvaluationChart::new(&self.records)
                    .highlighted(self.highlighted.as_deref())
                    .version(self.version),
            )
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        }
    }
}

fn fetch(client: Client, token: Uuid) -> Task<Message> {
    Task::perform(
        async move { client.fetch_historical_evaluations().await },
        move |result| Message::Fetched(token, result),
    )
}
