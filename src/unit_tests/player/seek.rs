use crate::{
    runtime::msg::{ActionPlayer, Event},
    types::{MediaCommand, PlayableMedia},
    unit_tests::{bound_player, effect_events, update_player, FakeMedia, TestEnv},
};

#[test]
fn seek_updates_position_immediately() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (ctx, mut player) = bound_player();
    update_player(
        &mut player,
        &ctx,
        ActionPlayer::TimeChanged {
            time: 0.0,
            duration: Some(200.0),
        },
    );
    let effects = update_player(&mut player, &ctx, ActionPlayer::Seek { progress: 50.0 });
    assert!(effects.has_changed);
    assert_eq!(player.current_time, 100.0, "position set without a time update");
    assert_eq!(player.progress(), 50.0);
    assert_eq!(
        effect_events(effects),
        vec![Event::MediaCommand {
            command: MediaCommand::Seek { time: 100.0 }
        }]
    );
}

#[test]
fn seek_with_unknown_duration() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (ctx, mut player) = bound_player();
    let effects = update_player(&mut player, &ctx, ActionPlayer::Seek { progress: 50.0 });
    assert!(!effects.has_changed);
    assert!(effect_events(effects).is_empty(), "no command issued");
    assert_eq!(player.current_time, 0.0);
}

#[test]
fn seek_with_zero_duration() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (ctx, mut player) = bound_player();
    update_player(
        &mut player,
        &ctx,
        ActionPlayer::TimeChanged {
            time: 0.0,
            duration: Some(0.0),
        },
    );
    let effects = update_player(&mut player, &ctx, ActionPlayer::Seek { progress: 10.0 });
    assert!(effect_events(effects).is_empty(), "no command issued");
    assert_eq!(player.current_time, 0.0);
    assert_eq!(player.progress(), 0.0);
}

#[test]
fn seek_clamps_progress() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (ctx, mut player) = bound_player();
    update_player(
        &mut player,
        &ctx,
        ActionPlayer::TimeChanged {
            time: 0.0,
            duration: Some(80.0),
        },
    );
    update_player(&mut player, &ctx, ActionPlayer::Seek { progress: 150.0 });
    assert_eq!(player.current_time, 80.0);
    update_player(&mut player, &ctx, ActionPlayer::Seek { progress: -5.0 });
    assert_eq!(player.current_time, 0.0);
}

#[test]
fn seek_moves_media() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (ctx, mut player) = bound_player();
    let media = FakeMedia::with_duration(200.0);
    update_player(&mut player, &ctx, media.time_changed());
    effect_events(update_player(
        &mut player,
        &ctx,
        ActionPlayer::Seek { progress: 25.0 },
    ))
    .iter()
    .for_each(|event| {
        if let Event::MediaCommand { command } = event {
            media.apply(command);
        }
    });
    assert_eq!(media.current_time(), 50.0);
    update_player(&mut player, &ctx, media.time_changed());
    assert_eq!(player.current_time, 50.0, "time update agrees with the seek");
}
