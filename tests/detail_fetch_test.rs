mod common;

#[cfg(test)]
mod detail_fetch_tests {
    use super::common::{Reply, ScriptedApi};
    use h3o::Resolution;
    use hexscout::{details::area_query, DetailFetcher, DetailState, HexagonId, LatLng};
    use std::sync::Arc;
    use std::time::Duration;

    fn hexagon(lat: f64, lng: f64) -> HexagonId {
        HexagonId::from_lat_lng(&LatLng::new(lat, lng), Resolution::Nine).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_latest_selection_wins() {
        // First request is slow, second is fast
        let api = Arc::new(ScriptedApi::with_area_replies([
            Reply::after_ms(500),
            Reply::after_ms(20),
        ]));
        let mut details = DetailFetcher::new(api.clone());
        let h1 = hexagon(52.2297, 21.0122);
        let h2 = hexagon(52.2400, 21.0300);

        details.select(Some(h1));
        assert_eq!(details.state(), &DetailState::Loading { id: h1 });
        details.select(Some(h2));
        assert_eq!(details.state(), &DetailState::Loading { id: h2 });

        let state = details.settle(Duration::from_secs(1)).await.clone();
        match state {
            DetailState::Loaded { id, score } => {
                assert_eq!(id, h2);
                assert_eq!(score.score, 2.0);
            }
            other => panic!("expected loaded details for h2, got {other:?}"),
        }

        // The slow response for h1 lands afterwards and must not replace h2
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert!(!details.poll());
        assert_eq!(details.state().hexagon(), Some(h2));
        assert_eq!(api.area_calls().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_deselect_before_completion_stays_hidden() {
        let api = Arc::new(ScriptedApi::with_area_replies([Reply::after_ms(100)]));
        let mut details = DetailFetcher::new(api);
        let h1 = hexagon(52.2297, 21.0122);

        details.select(Some(h1));
        details.select(None);
        assert_eq!(details.state(), &DetailState::Hidden);

        tokio::time::sleep(Duration::from_millis(200)).await;
        assert!(!details.poll());
        assert_eq!(details.state(), &DetailState::Hidden);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_request_shows_unavailable() {
        let api = Arc::new(ScriptedApi::with_area_replies([Reply::failing()]));
        let mut details = DetailFetcher::new(api);
        let h1 = hexagon(52.2297, 21.0122);

        details.select(Some(h1));
        let state = details.settle(Duration::from_secs(1)).await;
        assert_eq!(state, &DetailState::Unavailable { id: h1 });
    }

    #[tokio::test(start_paused = true)]
    async fn test_reselecting_shown_hexagon_does_not_refetch() {
        let api = Arc::new(ScriptedApi::default());
        let mut details = DetailFetcher::new(api.clone());
        let h1 = hexagon(52.2297, 21.0122);

        details.select(Some(h1));
        details.settle(Duration::from_secs(1)).await;
        details.select(Some(h1));
        assert!(details.state().score().is_some());
        assert_eq!(api.area_calls().len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_query_uses_cell_center_and_edge_length() {
        let api = Arc::new(ScriptedApi::default());
        let mut details = DetailFetcher::new(api.clone());
        let h1 = hexagon(52.2297, 21.0122);

        details.select(Some(h1));
        details.settle(Duration::from_secs(1)).await;

        let calls = api.area_calls();
        assert_eq!(calls, vec![area_query(&h1)]);
        // Resolution 9 edges are roughly 200 m long
        assert!((150..250).contains(&calls[0].radius));
    }

    #[tokio::test(start_paused = true)]
    async fn test_close_hides_loaded_panel() {
        let api = Arc::new(ScriptedApi::default());
        let mut details = DetailFetcher::new(api);
        let h1 = hexagon(52.2297, 21.0122);

        details.select(Some(h1));
        details.settle(Duration::from_secs(1)).await;
        details.close();
        assert_eq!(details.state(), &DetailState::Hidden);
    }
}
