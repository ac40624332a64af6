use std::{
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

use async_trait::async_trait;
use vibecoder_config::{Profile, VibeConfig};
use vibecoder_resolver::*;
use vibecoder_themes::{Theme, ThemeRegistry};

#[derive(Default)]
struct CountingApplier {
    calls: AtomicUsize,
}

#[async_trait]
impl Applier for CountingApplier {
    async fn apply(&self, _theme: &Theme) -> Result<(), ApplyError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

struct Fixture {
    service: ThemeService,
    clock: Arc<FixedClock>,
    applier: Arc<CountingApplier>,
    sink: Arc<RecordingSink>,
}

fn start(hour: u32, config: VibeConfig) -> Fixture {
    let clock = Arc::new(FixedClock::new(hour));
    let applier = Arc::new(CountingApplier::default());
    let sink = Arc::new(RecordingSink::new());
    let controller = ThemeController::new(
        ThemeRegistry::builtin(config.language_preset()),
        config,
        clock.clone(),
        applier.clone(),
        sink.clone(),
    );
    Fixture {
        service: ThemeService::start(controller),
        clock,
        applier,
        sink,
    }
}

async fn wait_for_resolutions(service: &ThemeService, count: u64) -> ServiceStatus {
    let mut rx = service.subscribe();
    let status = rx
        .wait_for(|status| status.resolutions >= count)
        .await
        .expect("service stopped early");
    status.clone()
}

#[tokio::test(start_paused = true)]
async fn test_start_resolves_immediately_and_arms_timer() {
    let mut f = start(9, VibeConfig::default());

    let status = wait_for_resolutions(&f.service, 1).await;
    assert_eq!(status.state.theme_key, "morning-calm");
    assert_eq!(status.state.trigger, TriggerType::Time);
    assert_eq!(status.timer_period, Some(Duration::from_secs(300)));
    assert_eq!(status.timer_rebuilds, 1);
    assert_eq!(f.applier.calls.load(Ordering::SeqCst), 1);

    f.service.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_ticks_recheck_without_rewriting_settings() {
    let mut f = start(9, VibeConfig::default());
    wait_for_resolutions(&f.service, 1).await;

    // idle runtime auto-advances to each tick
    wait_for_resolutions(&f.service, 4).await;
    assert_eq!(f.applier.calls.load(Ordering::SeqCst), 1);
    assert!(f.sink.len() >= 4);

    f.clock.set_hour(13);
    let status = wait_for_resolutions(&f.service, 5).await;
    assert_eq!(status.state.theme_key, "afternoon-focus");
    assert_eq!(f.applier.calls.load(Ordering::SeqCst), 2);

    f.service.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_language_event_resolves_immediately() {
    let mut f = start(20, VibeConfig::default());
    wait_for_resolutions(&f.service, 1).await;

    f.service
        .send(ThemeEvent::ActiveEditorChanged {
            language_id: Some("Python".to_string()),
        })
        .unwrap();
    let status = wait_for_resolutions(&f.service, 2).await;

    assert_eq!(status.state.theme_key, "python-zen");
    assert_eq!(status.state.trigger, TriggerType::Language);
    assert_eq!(f.sink.last().unwrap().text, "Vibe: Python Zen");

    f.service.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_interval_change_rebuilds_timer_once() {
    let mut f = start(9, VibeConfig::default());
    wait_for_resolutions(&f.service, 1).await;

    let config = VibeConfig {
        update_interval_minutes: 2,
        ..Default::default()
    };
    f.service
        .send(ThemeEvent::ConfigurationChanged(config))
        .unwrap();
    let status = wait_for_resolutions(&f.service, 2).await;

    assert_eq!(status.resolutions, 2);
    assert_eq!(status.timer_rebuilds, 2);
    assert_eq!(status.timer_period, Some(Duration::from_secs(120)));

    tokio::time::sleep(Duration::from_secs(121)).await;
    let status = wait_for_resolutions(&f.service, 3).await;
    assert_eq!(status.timer_rebuilds, 2);

    f.service.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_disabling_time_trigger_removes_timer() {
    let mut f = start(9, VibeConfig::default());
    wait_for_resolutions(&f.service, 1).await;

    let config = VibeConfig {
        enable_time_trigger: false,
        ..Default::default()
    };
    f.service
        .send(ThemeEvent::ConfigurationChanged(config))
        .unwrap();
    let status = wait_for_resolutions(&f.service, 2).await;
    assert_eq!(status.timer_period, None);
    assert_eq!(status.state.trigger, TriggerType::Fallback);

    tokio::time::sleep(Duration::from_secs(3600)).await;
    assert_eq!(f.service.status().resolutions, 2);

    f.service.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_showcase_profile_ticks_every_minute() {
    let config = VibeConfig {
        profile: Profile::Showcase,
        update_interval_minutes: 30,
        ..Default::default()
    };
    let mut f = start(9, config);
    let status = wait_for_resolutions(&f.service, 1).await;
    assert_eq!(status.timer_period, Some(Duration::from_secs(60)));

    f.service
        .send(ThemeEvent::LanguageChanged {
            language_id: "rust".to_string(),
        })
        .unwrap();
    let status = wait_for_resolutions(&f.service, 2).await;
    assert_eq!(status.state.theme_key, "rust-rush");

    f.service.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_stop_is_idempotent_and_final() {
    let mut f = start(9, VibeConfig::default());
    wait_for_resolutions(&f.service, 1).await;

    let controller = f.service.stop().await.unwrap().expect("first stop returns controller");
    assert_eq!(controller.state().theme_key, "morning-calm");
    assert!(f.service.stop().await.unwrap().is_none());
    assert!(!f.service.is_running());

    assert!(matches!(
        f.service.send(ThemeEvent::ActiveEditorChanged { language_id: None }),
        Err(ServiceError::Stopped)
    ));

    let calls = f.applier.calls.load(Ordering::SeqCst);
    let labels = f.sink.len();
    tokio::time::sleep(Duration::from_secs(3600)).await;
    assert_eq!(f.applier.calls.load(Ordering::SeqCst), calls);
    assert_eq!(f.sink.len(), labels);
    assert_eq!(f.service.status().timer_period, None);
}

#[tokio::test(start_paused = true)]
async fn test_manual_selection_until_next_recheck() {
    let mut f = start(9, VibeConfig::default());
    wait_for_resolutions(&f.service, 1).await;

    f.service
        .send(ThemeEvent::ManualSelection {
            theme_key: "java-jive".to_string(),
        })
        .unwrap();
    let mut rx = f.service.subscribe();
    let status = rx
        .wait_for(|s| s.state.trigger == TriggerType::Manual)
        .await
        .unwrap()
        .clone();
    assert_eq!(status.state.theme_key, "java-jive");

    let status = wait_for_resolutions(&f.service, 2).await;
    assert_eq!(status.state.theme_key, "morning-calm");
    assert_eq!(status.state.trigger, TriggerType::Time);

    f.service.stop().await.unwrap();
}

#[tokio::test(start_paused = true)]
async fn test_unknown_manual_selection_is_handled_without_change() {
    let mut f = start(20, VibeConfig::default());
    wait_for_resolutions(&f.service, 1).await;

    f.service
        .send(ThemeEvent::ManualSelection {
            theme_key: "solarized".to_string(),
        })
        .unwrap();
    let mut rx = f.service.subscribe();
    let status = rx.wait_for(|s| s.events_handled == 1).await.unwrap().clone();

    assert_eq!(status.state.theme_key, "night-owl");
    assert_eq!(status.resolutions, 1);
    assert_eq!(f.applier.calls.load(Ordering::SeqCst), 1);

    f.service.stop().await.unwrap();
}
