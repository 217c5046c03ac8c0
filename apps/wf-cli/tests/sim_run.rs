//! Integration test driving a full companion session over the sim host

use wf_cli::commands::run::run_session;
use wf_cli::transport::{SimBridge, SimOptions};
use wf_companion::{Companion, CompanionConfig};
use wf_model::HostCommand;

#[test]
fn test_sim_session_delivers_payload() {
    let mut companion = Companion::new(CompanionConfig::default());
    let mut bridge = SimBridge::new(SimOptions {
        minute_color: "0x1A2B3C".to_string(),
        hour_color: "0x000000".to_string(),
        ..SimOptions::default()
    });

    run_session(&mut companion, &mut bridge).unwrap();

    let stats = companion.stats();
    assert_eq!(stats.sends, 1);
    assert_eq!(stats.delivered, 1);
    assert_eq!(stats.failed, 0);
    assert_eq!(companion.in_flight_count(), 0);

    // The companion opened the page, then sent the parsed colors
    let received = bridge.received_commands();
    assert_eq!(received.len(), 2);
    assert_eq!(
        received[0],
        HostCommand::OpenUrl {
            url: CompanionConfig::DEFAULT_SETTINGS_URL.to_string(),
        }
    );
    match &received[1] {
        HostCommand::SendAppMessage { payload, .. } => {
            assert_eq!(payload.minute_r, 26);
            assert_eq!(payload.minute_g, 43);
            assert_eq!(payload.minute_b, 60);
            assert_eq!(payload.hour_r, 0);
        }
        other => panic!("Expected SendAppMessage, got {:?}", other),
    }
}

#[test]
fn test_sim_session_counts_rejected_send() {
    let mut companion = Companion::new(CompanionConfig::default());
    let mut bridge = SimBridge::new(SimOptions {
        fail_send: true,
        ..SimOptions::default()
    });

    run_session(&mut companion, &mut bridge).unwrap();

    let stats = companion.stats();
    assert_eq!(stats.sends, 1);
    assert_eq!(stats.delivered, 0);
    assert_eq!(stats.failed, 1);
}

#[test]
fn test_sim_session_with_settings_url_override() {
    let mut companion = Companion::new(CompanionConfig {
        settings_url: "https://example.com/settings".to_string(),
    });
    let mut bridge = SimBridge::new(SimOptions::default());

    run_session(&mut companion, &mut bridge).unwrap();

    assert_eq!(
        bridge.received_commands()[0],
        HostCommand::OpenUrl {
            url: "https://example.com/settings".to_string(),
        }
    );
}

#[test]
fn test_sim_session_rejects_bad_color_without_sending() {
    // The handler fails on the malformed color; the loop finishes and
    // nothing is sent to the watch
    let mut companion = Companion::new(CompanionConfig::default());
    let mut bridge = SimBridge::new(SimOptions {
        minute_color: "0xZZZZZZ".to_string(),
        ..SimOptions::default()
    });

    run_session(&mut companion, &mut bridge).unwrap();

    let stats = companion.stats();
    assert_eq!(stats.sends, 0);
    assert_eq!(bridge.received_commands().len(), 1);
    assert!(matches!(
        bridge.received_commands()[0],
        HostCommand::OpenUrl { .. }
    ));
}
