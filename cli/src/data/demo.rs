//! Fixed demo values shown by the dashboard.
//!
//! Nothing here is measured. The feed stands in for the sensor pipeline the
//! concept would eventually have, and is the only input to
//! [`crate::data::DashboardModel`].

use std::time::Duration;

use cradle_metrics::{
    AlertEntry, AlertPriority, ImpactSample, TimelineEvent, WeightSample, ZoneReading,
};

#[derive(Debug, Clone)]
pub struct Badge {
    pub icon: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone)]
pub struct RecentAlert {
    pub message: &'static str,
    pub age: Duration,
    pub priority: AlertPriority,
}

#[derive(Debug, Clone)]
pub struct DemoFeed {
    pub skin_temp_c: f64,
    pub mat_temp_c: f64,
    pub expression: Badge,
    pub sleep_state: Badge,
    pub avatar_caption: &'static str,
    pub pcm_state: &'static str,
    pub status: Badge,
    pub recent_alert: RecentAlert,
    pub alerts: Vec<AlertEntry>,
    pub zones: Vec<ZoneReading>,
    pub heatmap_caption: &'static str,
    pub timeline: Vec<TimelineEvent>,
    pub comfort_score: f64,
    pub prediction: &'static str,
    pub weights: Vec<WeightSample>,
    pub impact: Vec<ImpactSample>,
    pub impact_period: &'static str,
}

fn event(time: &str, event: &str) -> TimelineEvent {
    TimelineEvent {
        time: time.to_string(),
        event: event.to_string(),
    }
}

impl Default for DemoFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl DemoFeed {
    pub fn new() -> Self {
        Self {
            skin_temp_c: 36.7,
            mat_temp_c: 28.5,
            expression: Badge {
                icon: "🙂",
                label: "Happy/Comfortable",
            },
            sleep_state: Badge {
                icon: "💤",
                label: "Sleeping peacefully",
            },
            avatar_caption: "Smiling baby (updates with expression)",
            pcm_state: "Melting (absorbing heat)",
            status: Badge {
                icon: "✅",
                label: "Baby comfortable",
            },
            recent_alert: RecentAlert {
                message: "Baby turned restless",
                age: Duration::from_secs(10 * 60),
                priority: AlertPriority::Low,
            },
            alerts: vec![AlertEntry {
                time: "09:45".to_string(),
                message: "Slight restlessness".to_string(),
                priority: AlertPriority::Low,
            }],
            zones: vec![
                ZoneReading::new("A", 37.2),
                ZoneReading::new("B", 29.1),
                ZoneReading::new("C", 27.9),
            ],
            heatmap_caption: "Mostly neutral (stable & safe)",
            timeline: vec![
                event("09:00", "Baby placed on mat"),
                event("09:15", "PCM warmed up → 28 °C"),
                event("09:30", "Baby fell asleep 🙂"),
                event("09:45", "Alert: slight restlessness ⚠"),
                event("10:00", "Comfort Score: 92/100"),
            ],
            comfort_score: 92.0,
            prediction: "Baby likely to remain stable for the next 30 minutes.",
            weights: vec![
                WeightSample::new("Mon", 3.10),
                WeightSample::new("Tue", 3.15),
                WeightSample::new("Wed", 3.22),
                WeightSample::new("Thu", 3.28),
                WeightSample::new("Fri", 3.35),
            ],
            impact: vec![
                ImpactSample::new("09:00", 0.00),
                ImpactSample::new("09:15", 0.10),
                ImpactSample::new("09:30", 0.25),
                ImpactSample::new("09:45", 0.40),
                ImpactSample::new("10:00", 0.50),
            ],
            impact_period: "last 1 hour",
        }
    }
}
