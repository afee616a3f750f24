mod common;

use std::sync::Arc;

use common::{MockNhlClient, fixture_teams, raw_team};
use nhl_standings::controller::nhl::{aggregate_teams, playoff_participation};
use nhl_standings::error::{LookupGap, UpstreamError};
use nhl_standings::model::{AbbreviationMap, Season};

#[tokio::test]
async fn test4_panicking_lookup_is_isolated() -> Result<(), Box<dyn std::error::Error>> {
    let mock = Arc::new(
        MockNhlClient::with_teams(fixture_teams())
            .playoff(&["BOS", "TOR", "FLA"])
            .panicking(&["BOS"]),
    );

    let teams =
        aggregate_teams(mock.clone(), &AbbreviationMap::bundled(), Season::default()).await?;

    assert_eq!(teams.len(), 4);
    assert_eq!(teams[0].name, "Boston Bruins");
    assert!(!teams[0].has_playoff_games);
    assert_eq!(teams[0].record, "20-15");
    assert!(teams[1].has_playoff_games);
    assert!(teams[2].has_playoff_games);
    assert!(!teams[3].has_playoff_games);
    Ok(())
}

#[tokio::test]
async fn test4_every_lookup_failing_still_returns_all_teams()
-> Result<(), Box<dyn std::error::Error>> {
    let mock = Arc::new(
        MockNhlClient::with_teams(fixture_teams()).failing(&["BOS", "TOR", "FLA"]),
    );

    let teams = aggregate_teams(mock, &AbbreviationMap::bundled(), Season::default()).await?;

    assert_eq!(teams.len(), 4);
    assert!(teams.iter().all(|team| !team.has_playoff_games));
    assert_eq!(teams[2].points, 52);
    assert_eq!(teams[2].progress_percent, 63);
    Ok(())
}

#[tokio::test]
async fn test4_summary_failure_aborts() {
    let mock = Arc::new(MockNhlClient::default());
    let err = aggregate_teams(mock.clone(), &AbbreviationMap::bundled(), Season::default())
        .await
        .unwrap_err();
    assert!(matches!(err, UpstreamError::Payload { .. }));
    assert_eq!(MockNhlClient::calls(&mock.meta_calls), 0);
}

#[tokio::test]
async fn test4_custom_abbreviation_map() -> Result<(), Box<dyn std::error::Error>> {
    let abbreviations = AbbreviationMap::from_json_str(r#"{"Team A": "AAA", "Team B": "BBB"}"#)?;
    let mock = Arc::new(
        MockNhlClient::with_teams(vec![
            raw_team(1, "Team B", 10, 2, Some(1)),
            raw_team(2, "Team A", 8, 4, None),
        ])
        .playoff(&["AAA"]),
    );

    let teams = aggregate_teams(mock, &abbreviations, Season::default()).await?;

    assert_eq!(teams[0].name, "Team B");
    assert!(!teams[0].has_playoff_games);
    assert_eq!(teams[1].name, "Team A");
    assert!(teams[1].has_playoff_games);
    Ok(())
}

#[tokio::test]
async fn test4_playoff_participation_reports_gaps() {
    let mock = MockNhlClient::default().playoff(&["EDM"]).failing(&["VAN"]);
    let season = Season::default();

    assert!(playoff_participation(&mock, "EDM", season).await.unwrap());
    assert!(!playoff_participation(&mock, "CGY", season).await.unwrap());
    assert!(matches!(
        playoff_participation(&mock, "VAN", season).await,
        Err(LookupGap::Upstream(UpstreamError::Network { .. }))
    ));
}
