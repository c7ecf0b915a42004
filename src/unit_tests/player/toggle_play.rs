use crate::{
    models::{ctx::Ctx, player::Player},
    runtime::msg::{Action, ActionPlayer, Event},
    types::{MediaCommand, MediaError, PlayableMedia},
    unit_tests::{
        bound_player, core_events, dispatch, effect_events, new_states, test_runtime,
        update_player, FakeMedia, TestEnv, TestModelField,
    },
};

#[test]
fn toggle_play_from_paused() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (ctx, mut player) = bound_player();
    let effects = update_player(&mut player, &ctx, ActionPlayer::TogglePlay);
    assert!(effects.has_changed, "player changed");
    assert!(player.is_playing, "player is playing");
    assert_eq!(
        effect_events(effects),
        vec![Event::MediaCommand {
            command: MediaCommand::Play
        }]
    );
}

#[test]
fn toggle_play_twice() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (ctx, mut player) = bound_player();
    let initial = player.is_playing;
    let play_events = effect_events(update_player(&mut player, &ctx, ActionPlayer::TogglePlay));
    let pause_events = effect_events(update_player(&mut player, &ctx, ActionPlayer::TogglePlay));
    assert_eq!(player.is_playing, initial, "play state restored");
    assert_eq!(
        play_events
            .into_iter()
            .chain(pause_events)
            .collect::<Vec<_>>(),
        vec![
            Event::MediaCommand {
                command: MediaCommand::Play
            },
            Event::MediaCommand {
                command: MediaCommand::Pause
            },
        ]
    );
}

#[test]
fn toggle_play_without_source() {
    let ctx = Ctx::new(vec![]);
    let (mut player, _) = Player::new(&ctx);
    let effects = update_player(&mut player, &ctx, ActionPlayer::TogglePlay);
    assert!(!effects.has_changed, "player unchanged");
    assert!(!player.is_playing);
    assert!(effect_events(effects).is_empty(), "no command issued");
}

#[test]
fn toggle_play_clears_media_error() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (ctx, mut player) = bound_player();
    update_player(
        &mut player,
        &ctx,
        ActionPlayer::MediaFailed(MediaError::Network),
    );
    assert_eq!(player.error, Some(MediaError::Network));
    update_player(&mut player, &ctx, ActionPlayer::TogglePlay);
    assert!(player.is_playing);
    assert_eq!(player.error, None, "error cleared on retry");
}

#[test]
fn toggle_play_drives_media() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let media = FakeMedia::with_duration(60.0);
    let (runtime, mut rx) = test_runtime();
    let mut events = core_events(&mut rx);
    dispatch(&runtime, Action::Player(ActionPlayer::TogglePlay));
    events.extend(core_events(&mut rx));
    events.iter().for_each(|event| {
        if let Event::MediaCommand { command } = event {
            media.apply(command);
        }
    });
    assert_eq!(media.src.borrow().as_deref(), Some("video1.mp4"));
    assert!(!*media.paused.borrow(), "media element is playing");
    assert_eq!(
        *media.commands.borrow(),
        vec![
            MediaCommand::Load {
                src: "video1.mp4".to_owned()
            },
            MediaCommand::Play,
        ]
    );
}

#[test]
fn toggle_play_changes_player_field_only() {
    let _env_mutex = TestEnv::reset().expect("Should have exclusive lock to TestEnv");
    let (runtime, mut rx) = test_runtime();
    new_states(&mut rx);
    dispatch(&runtime, Action::Player(ActionPlayer::TogglePlay));
    assert_eq!(new_states(&mut rx), vec![TestModelField::Player]);
}
