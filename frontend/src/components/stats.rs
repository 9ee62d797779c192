use log::info;
use yew::prelude::*;

use crate::components::reveal::Reveal;
use crate::config;
use crate::content::{Stat, STATS};
use crate::hooks::use_count_up;
use crate::state::{format_stat, CountUp};

#[derive(Properties, PartialEq)]
struct StatCounterProps {
    stat: Stat,
    active: bool,
}

#[function_component(StatCounter)]
fn stat_counter(props: &StatCounterProps) -> Html {
    let count = CountUp::new(props.stat.target, config::COUNT_UP_DURATION_MS);
    let value = use_count_up(count, props.active);

    html! {
        <div class="stat-card">
            <h3 class={classes!("stat-value", props.stat.accent)}>{format_stat(value)}</h3>
            <p class="stat-label">{props.stat.label}</p>
        </div>
    }
}

/// "Connect with our community" block. All counters start together when the block enters view.
#[function_component(CommunityStats)]
pub fn community_stats() -> Html {
    let active = use_state_eq(|| false);

    let on_enter = {
        let active = active.clone();
        Callback::from(move |_| {
            info!("Community stats in view, starting counters");
            active.set(true);
        })
    };

    html! {
        <section class="stats-section">
            <Reveal class="stats-content" on_enter={on_enter}>
                <h2>{"Connect with our community"}</h2>
                <div class="stats-grid">
                    { for STATS.iter().map(|stat| html! {
                        <StatCounter key={stat.label} stat={*stat} active={*active} />
                    }) }
                </div>
            </Reveal>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::render;

    #[test]
    fn counter_shows_zero_before_entering_view() {
        for stat in STATS.iter() {
            let html = render::<StatCounter>(StatCounterProps { stat: *stat, active: false });
            assert!(html.contains(">0+<"), "{} rendered {}", stat.label, html);
            assert!(html.contains(stat.label));
        }
    }

    #[test]
    fn section_starts_with_every_counter_at_zero() {
        let html = render::<CommunityStats>(());
        assert_eq!(html.matches(">0+<").count(), STATS.len());
        assert!(!html.contains("1,000+"));
    }

    #[test]
    fn accent_class_is_rendered() {
        let html = render::<StatCounter>(StatCounterProps { stat: STATS[2], active: false });
        assert!(html.contains("class=\"stat-value instagram\""));
    }
}
