//! Flat row type for tabular output.

use fr_route::RankedResult;

/// One event of one ranked route.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RouteStopRow {
    /// 1-based position of the route in the ranking.
    pub rank:       u32,
    pub date:       String,
    pub score:      i64,
    pub event_id:   u32,
    pub name:       String,
    pub start_time: String,
    /// `HH:MM`; hours above 23 mean the event ends after midnight.
    pub end_time:   String,
    pub location:   String,
}

impl RouteStopRow {
    pub const HEADER: [&'static str; 8] =
        ["rank", "date", "score", "event_id", "name", "start_time", "end_time", "location"];

    /// Flatten a ranking into rows, routes in rank order and stops in
    /// start order.
    pub fn from_ranked(result: &RankedResult) -> Vec<RouteStopRow> {
        result
            .iter()
            .enumerate()
            .flat_map(|(i, route)| {
                route.events.iter().map(move |event| RouteStopRow {
                    rank:       i as u32 + 1,
                    date:       route.date.to_string(),
                    score:      route.score,
                    event_id:   event.id.get(),
                    name:       event.name.clone(),
                    start_time: event.start.to_string(),
                    end_time:   clock(event.end_minutes()),
                    location:   event.location.clone(),
                })
            })
            .collect()
    }

    pub fn to_record(&self) -> [String; 8] {
        [
            self.rank.to_string(),
            self.date.clone(),
            self.score.to_string(),
            self.event_id.to_string(),
            self.name.clone(),
            self.start_time.clone(),
            self.end_time.clone(),
            self.location.clone(),
        ]
    }
}

fn clock(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
