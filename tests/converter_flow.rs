//! App and Network actors wired together against a local provider.

mod support;

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::timeout;

use currency_converter::constants::{ERR_CONVERSION_FETCH, ERR_CURRENCY_LIST, ERR_INVALID_CURRENCY};
use currency_converter::network::{create_client, NetworkActor, RatesClient};
use currency_converter::{AppActor, AppState, RenderState, UiEvent};

struct Harness {
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: mpsc::UnboundedReceiver<RenderState>,
}

impl Harness {
    fn start(api_base_url: String, state: AppState) -> Self {
        let (ui_tx, ui_rx) = mpsc::unbounded_channel();
        let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel();
        let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel();
        let (render_tx, render_rx) = mpsc::unbounded_channel();

        let client = RatesClient::new(create_client(Duration::from_secs(5)), api_base_url);
        tokio::spawn(NetworkActor::new(client, net_resp_tx).run(net_cmd_rx));
        tokio::spawn(AppActor::with_state(state, net_cmd_tx, render_tx).run(ui_rx, net_resp_rx));

        Harness { ui_tx, render_rx }
    }

    fn send(&self, events: impl IntoIterator<Item = UiEvent>) {
        for event in events {
            self.ui_tx.send(event).unwrap();
        }
    }

    /// Next render state matching `pred`
    async fn wait_for(&mut self, pred: impl Fn(&RenderState) -> bool) -> RenderState {
        timeout(Duration::from_secs(5), async {
            loop {
                let state = self.render_rx.recv().await.expect("app actor stopped");
                if pred(&state) {
                    return state;
                }
            }
        })
        .await
        .expect("timed out waiting for render state")
    }
}

#[tokio::test]
async fn convert_swap_clear() {
    let root = support::spawn_provider().await;
    let mut app = Harness::start(format!("{root}/v4"), AppState::new());

    let loaded = app.wait_for(|s| !s.currency_list.is_empty()).await;
    assert_eq!(loaded.currency_list, vec!["USD", "EUR", "GBP", "JPY", "AUD"]);
    assert_eq!(loaded.error, None);

    app.send([
        UiEvent::StartEditing,
        UiEvent::CharInput('1'),
        UiEvent::CharInput('0'),
        UiEvent::CharInput('0'),
        UiEvent::StopEditing,
        UiEvent::NextField,
        UiEvent::SelectNext,
        UiEvent::NextField,
        UiEvent::SelectNext,
        UiEvent::SelectNext,
        UiEvent::Convert,
    ]);

    let converted = app.wait_for(|s| s.converted_amount.is_some()).await;
    assert_eq!(converted.amount, "100");
    assert_eq!(converted.source_currency, "USD");
    assert_eq!(converted.target_currency, "EUR");
    assert!((converted.converted_amount.unwrap() - 90.0).abs() < 1e-9);
    assert_eq!(converted.error, None);
    assert_eq!(converted.result_line().as_deref(), Some("100 USD equals 90.00 EUR"));
    assert_eq!(converted.rates_date.as_deref(), Some("2024-05-01"));

    app.send([UiEvent::Swap]);
    let swapped = app.wait_for(|s| s.source_currency == "EUR").await;
    assert_eq!(swapped.target_currency, "USD");
    assert_eq!(swapped.converted_amount, converted.converted_amount);

    app.send([UiEvent::Clear]);
    let cleared = app.wait_for(|s| s.amount.is_empty()).await;
    assert!(cleared.source_currency.is_empty());
    assert!(cleared.target_currency.is_empty());
    assert_eq!(cleared.converted_amount, None);
    assert_eq!(cleared.error, None);
    assert_eq!(cleared.currency_list.len(), 5);

    app.send([UiEvent::Quit]);
}

#[tokio::test]
async fn unknown_target_sets_invalid_code_error() {
    let root = support::spawn_provider().await;
    let mut state = AppState::new().with_precision(4);
    state.conversion.set_amount("100");
    state.conversion.set_source_currency("USD");
    state.conversion.set_target_currency("ZZZ");
    state.conversion.converted_amount = Some(12.5);
    let mut app = Harness::start(format!("{root}/v4"), state);

    app.wait_for(|s| !s.currency_list.is_empty()).await;
    app.send([UiEvent::Convert]);

    let failed = app.wait_for(|s| s.error.is_some()).await;
    assert_eq!(failed.error.as_deref(), Some(ERR_INVALID_CURRENCY));
    assert_eq!(failed.converted_amount, Some(12.5));
    assert_eq!(failed.result_line().as_deref(), Some("100 USD equals 12.5000 ZZZ"));
}

#[tokio::test]
async fn empty_source_sets_fetch_error() {
    let root = support::spawn_provider().await;
    let mut app = Harness::start(format!("{root}/v4"), AppState::new());

    app.wait_for(|s| !s.currency_list.is_empty()).await;
    app.send([UiEvent::Convert]);

    let failed = app.wait_for(|s| s.error.is_some()).await;
    assert_eq!(failed.error.as_deref(), Some(ERR_CONVERSION_FETCH));
    assert_eq!(failed.converted_amount, None);
}

#[tokio::test]
async fn list_failure_leaves_list_empty() {
    let root = support::spawn_provider().await;
    let mut app = Harness::start(format!("{root}/down"), AppState::new());

    let failed = app.wait_for(|s| s.error.is_some()).await;
    assert_eq!(failed.error.as_deref(), Some(ERR_CURRENCY_LIST));
    assert!(failed.currency_list.is_empty());
    assert!(!failed.loading_currencies);
}

#[tokio::test]
async fn reload_replaces_currency_list() {
    let root = support::spawn_provider().await;
    let mut app = Harness::start(format!("{root}/v4"), AppState::new());

    app.wait_for(|s| !s.currency_list.is_empty()).await;
    app.send([UiEvent::ReloadCurrencies]);
    let reloading = app.wait_for(|s| s.loading_currencies).await;
    assert_eq!(reloading.currency_list.len(), 5);

    let reloaded = app.wait_for(|s| !s.loading_currencies).await;
    assert_eq!(reloaded.currency_list, vec!["USD", "EUR", "GBP", "JPY", "AUD"]);
}
