//! Side-effect execution for update actions
//!
//! Remote work runs in spawned tasks so the engine loop never blocks on
//! the network; completions re-enter the loop as messages. In-flight
//! tasks are never cancelled — a superseded write still completes and
//! applies its patch in completion order.

use tokio::sync::mpsc;
use tracing::warn;

use airtray_api::{AirconApi, AirconSetting};

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute one action against the remote service.
///
/// `Render` and `Quit` are engine-internal and handled before this is
/// reached.
pub fn handle_action<A>(
    action: UpdateAction,
    api: &A,
    appliance_id: &str,
    msg_tx: &mpsc::Sender<Message>,
) where
    A: AirconApi + Clone + Send + Sync + 'static,
{
    match action {
        UpdateAction::Poll => {
            spawn_reading_fetch(api, msg_tx);
            spawn_appliance_fetch(api, appliance_id, msg_tx);
        }
        UpdateAction::FetchAppliance => spawn_appliance_fetch(api, appliance_id, msg_tx),
        UpdateAction::SendSetting(setting) => {
            spawn_setting_write(api, appliance_id, setting, msg_tx)
        }
        // Handled by the engine loop itself.
        UpdateAction::Render | UpdateAction::Quit => {}
    }
}

/// Fetch the device reading; errors are logged and swallowed — the
/// previous snapshot stays authoritative.
fn spawn_reading_fetch<A>(api: &A, msg_tx: &mpsc::Sender<Message>)
where
    A: AirconApi + Clone + Send + Sync + 'static,
{
    let api = api.clone();
    let tx = msg_tx.clone();
    tokio::spawn(async move {
        match api.fetch_device_reading().await {
            Ok(reading) => {
                let _ = tx.send(Message::ReadingFetched(reading)).await;
            }
            Err(e) => warn!("device poll failed: {e}"),
        }
    });
}

/// Fetch appliance state; an absent appliance is a no-op cycle, errors
/// are logged and swallowed.
fn spawn_appliance_fetch<A>(api: &A, appliance_id: &str, msg_tx: &mpsc::Sender<Message>)
where
    A: AirconApi + Clone + Send + Sync + 'static,
{
    let api = api.clone();
    let appliance_id = appliance_id.to_string();
    let tx = msg_tx.clone();
    tokio::spawn(async move {
        match api.fetch_appliance_state(&appliance_id).await {
            Ok(Some(snapshot)) => {
                let _ = tx.send(Message::ApplianceFetched(snapshot)).await;
            }
            Ok(None) => {
                let _ = tx.send(Message::ApplianceMissing).await;
            }
            Err(e) => warn!("appliance poll failed: {e}"),
        }
    });
}

/// Post one settings field; completion (either way) re-enters the loop
/// so the per-action reconciliation can run.
fn spawn_setting_write<A>(
    api: &A,
    appliance_id: &str,
    setting: AirconSetting,
    msg_tx: &mpsc::Sender<Message>,
) where
    A: AirconApi + Clone + Send + Sync + 'static,
{
    let api = api.clone();
    let appliance_id = appliance_id.to_string();
    let tx = msg_tx.clone();
    tokio::spawn(async move {
        match api.send_aircon_setting(&appliance_id, setting.clone()).await {
            Ok(()) => {
                let _ = tx.send(Message::CommandSent(setting)).await;
            }
            Err(e) => {
                let _ = tx
                    .send(Message::CommandFailed {
                        setting,
                        error: e.to_string(),
                    })
                    .await;
            }
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use airtray_api::test_utils::FakeApi;
    use airtray_core::{ApplianceSettings, ApplianceSnapshot};

    fn test_snapshot() -> ApplianceSnapshot {
        ApplianceSnapshot {
            settings: ApplianceSettings {
                power: true,
                mode: Some("cool".to_string()),
                setting_temperature: Some("26".to_string()),
                volume: Some("auto".to_string()),
            },
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_poll_fetches_device_and_appliance_concurrently() {
        let api = FakeApi::new().with_reading(24.5).with_appliance(test_snapshot());
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(UpdateAction::Poll, &api, "ac-1", &tx);

        // Two completions, in whichever order the tasks finish.
        let first = rx.recv().await.unwrap();
        let second = rx.recv().await.unwrap();
        let mut got_reading = false;
        let mut got_appliance = false;
        for msg in [first, second] {
            match msg {
                Message::ReadingFetched(reading) => {
                    assert_eq!(reading.current_temperature, Some(24.5));
                    got_reading = true;
                }
                Message::ApplianceFetched(snapshot) => {
                    assert_eq!(snapshot.settings.mode.as_deref(), Some("cool"));
                    got_appliance = true;
                }
                other => panic!("unexpected message: {other:?}"),
            }
        }
        assert!(got_reading && got_appliance);
    }

    #[tokio::test]
    async fn test_absent_appliance_reports_missing() {
        let api = FakeApi::new().with_missing_appliance();
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(UpdateAction::FetchAppliance, &api, "ac-1", &tx);

        assert_eq!(rx.recv().await, Some(Message::ApplianceMissing));
    }

    #[tokio::test]
    async fn test_failed_fetches_produce_no_messages() {
        let api = FakeApi::new()
            .with_failing_reading()
            .with_failing_appliance();
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(UpdateAction::Poll, &api, "ac-1", &tx);

        // Both tasks fail and log; the channel closes without a message
        // once the only sender clones are dropped.
        drop(tx);
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test]
    async fn test_setting_write_reports_completion() {
        let api = FakeApi::new();
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::SendSetting(AirconSetting::Volume("3".to_string())),
            &api,
            "ac-1",
            &tx,
        );

        assert_eq!(
            rx.recv().await,
            Some(Message::CommandSent(AirconSetting::Volume("3".to_string())))
        );
        assert_eq!(api.sent(), vec![AirconSetting::Volume("3".to_string())]);
    }

    #[tokio::test]
    async fn test_failed_write_reports_failure_with_setting() {
        let api = FakeApi::new().with_failing_commands();
        let (tx, mut rx) = mpsc::channel(8);

        handle_action(
            UpdateAction::SendSetting(AirconSetting::Power(false)),
            &api,
            "ac-1",
            &tx,
        );

        match rx.recv().await.unwrap() {
            Message::CommandFailed { setting, error } => {
                assert_eq!(setting, AirconSetting::Power(false));
                assert!(error.contains("transport"));
            }
            other => panic!("unexpected message: {other:?}"),
        }
    }
}
