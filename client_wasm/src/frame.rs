//! Turn the game state into a drawable [`proto::Frame`]

use game_core::*;
use proto::{Frame, Phase, SoundCue, Sprite, SpriteKind, Text};

const WELCOME_SIZE: (f32, f32) = (184.0, 267.0);
const GAME_OVER_SIZE: (f32, f32) = (192.0, 42.0);
const DIGIT_SIZE: (f32, f32) = (24.0, 36.0);

const HUD_X: f32 = 10.0;
const HUD_Y: f32 = 10.0;
const HUD_LINE_HEIGHT: f32 = 25.0;

/// Alpha for the "off" half of the invincibility flicker
const FLICKER_ALPHA: u8 = 150;

pub fn build_frame(game: &Game, tick: u32) -> Frame {
    let phase = phase_to_proto(game.phase());
    let mut sprites = Vec::new();

    sprites.push(Sprite::new(
        SpriteKind::Background,
        0.0,
        0.0,
        game.config.window_width,
        game.config.window_height,
    ));

    if phase != Phase::Splash {
        for (_e, pipe) in game.world.query::<&PipePair>().iter() {
            sprites.push(box_sprite(SpriteKind::PipeUpper, &pipe.upper()));
            sprites.push(box_sprite(SpriteKind::PipeLower, &pipe.lower()));
        }
    }

    if let Some(floor) = game.floor() {
        sprites.push(Sprite::new(
            SpriteKind::Floor,
            floor.x,
            floor.y,
            floor.width,
            floor.height,
        ));
    }

    if phase != Phase::Splash {
        for (_e, (item, body)) in game.world.query::<(&PowerUp, &Body)>().iter() {
            let kind = SpriteKind::PowerUp(kind_to_proto(item.kind));
            sprites.push(box_sprite(kind, &body.aabb()));
        }
    }

    if let Some(player) = game.player() {
        sprites.push(player_sprite(&player, game.time.now_ms));
    }

    match phase {
        Phase::Splash => {
            let (w, h) = WELCOME_SIZE;
            sprites.push(Sprite::new(
                SpriteKind::Welcome,
                ((game.config.window_width - w) / 2.0).floor(),
                (game.map.viewport_height * 0.12).floor(),
                w,
                h,
            ));
        }
        Phase::Playing => score_sprites(&mut sprites, game.score.value, &game.config),
        Phase::GameOver => {
            score_sprites(&mut sprites, game.score.value, &game.config);
            let (w, h) = GAME_OVER_SIZE;
            sprites.push(Sprite::new(
                SpriteKind::GameOver,
                ((game.config.window_width - w) / 2.0).floor(),
                (game.map.viewport_height * 0.2).floor(),
                w,
                h,
            ));
        }
    }

    Frame {
        tick,
        phase,
        score: game.score.value,
        sprites,
        texts: hud_texts(&game.effects),
        sounds: game.events.sounds.iter().map(|s| sound_to_proto(*s)).collect(),
        quit: game.quit_requested(),
    }
}

fn box_sprite(kind: SpriteKind, bounds: &Aabb) -> Sprite {
    let size = bounds.size();
    Sprite::new(kind, bounds.min.x, bounds.min.y, size.x, size.y)
}

/// Player sprite, flickering with a gold outline while invincible
fn player_sprite(player: &Player, now_ms: u64) -> Sprite {
    let mut sprite = box_sprite(
        SpriteKind::Player {
            frame: player.sprite_index(),
        },
        &player.aabb(),
    );
    sprite.rotation = player.rot;
    if player.invincible && now_ms % Params::FLICKER_PERIOD_MS < Params::FLICKER_PERIOD_MS / 2 {
        sprite.alpha = FLICKER_ALPHA;
        sprite.glow = true;
    }
    sprite
}

/// Score digits centred near the top of the window
fn score_sprites(sprites: &mut Vec<Sprite>, score: u32, config: &Config) {
    let digits: Vec<u8> = score.to_string().bytes().map(|b| b - b'0').collect();
    let (w, h) = DIGIT_SIZE;
    let mut x = ((config.window_width - w * digits.len() as f32) / 2.0).floor();
    let y = (config.window_height * 0.1).floor();
    for digit in digits {
        sprites.push(Sprite::new(SpriteKind::Digit(digit), x, y, w, h));
        x += w;
    }
}

fn hud_texts(effects: &ActiveEffects) -> Vec<Text> {
    effects
        .hud_lines()
        .into_iter()
        .enumerate()
        .map(|(i, (kind, text))| Text {
            text,
            x: HUD_X,
            y: HUD_Y + i as f32 * HUD_LINE_HEIGHT,
            color: kind.color(),
        })
        .collect()
}

pub fn phase_to_proto(phase: GamePhase) -> Phase {
    match phase {
        GamePhase::Splash => Phase::Splash,
        GamePhase::Playing => Phase::Playing,
        GamePhase::GameOver => Phase::GameOver,
    }
}

fn kind_to_proto(kind: PowerUpKind) -> proto::PowerUp {
    match kind {
        PowerUpKind::SpeedBoost => proto::PowerUp::SpeedBoost,
        PowerUpKind::Invincible => proto::PowerUp::Invincible,
        PowerUpKind::SlowMotion => proto::PowerUp::SlowMotion,
        PowerUpKind::SmallSize => proto::PowerUp::SmallSize,
    }
}

fn sound_to_proto(sound: Sound) -> SoundCue {
    match sound {
        Sound::Wing => SoundCue::Wing,
        Sound::Hit => SoundCue::Hit,
        Sound::Die => SoundCue::Die,
        Sound::Point => SoundCue::Point,
        Sound::Pickup => SoundCue::Pickup,
        Sound::Swoosh => SoundCue::Swoosh,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(frame: &Frame, pred: impl Fn(&SpriteKind) -> bool) -> usize {
        frame.sprites.iter().filter(|s| pred(&s.kind)).count()
    }

    #[test]
    fn test_splash_frame() {
        let game = Game::new(1);
        let frame = build_frame(&game, 0);
        assert_eq!(frame.phase, Phase::Splash);
        assert_eq!(frame.sprites[0].kind, SpriteKind::Background);
        assert_eq!(count(&frame, |k| *k == SpriteKind::Welcome), 1);
        assert_eq!(count(&frame, |k| *k == SpriteKind::PipeUpper), 0);
        assert_eq!(count(&frame, |k| matches!(k, SpriteKind::Digit(_))), 0);
        assert!(frame.texts.is_empty());
        assert!(!frame.quit);
    }

    #[test]
    fn test_playing_frame_shows_pipes_and_score() {
        let mut game = Game::new(1);
        game.tick(&[InputEvent::Tap], 33);
        game.score.value = 12;
        let frame = build_frame(&game, 1);

        assert_eq!(count(&frame, |k| *k == SpriteKind::PipeUpper), 2);
        assert_eq!(count(&frame, |k| *k == SpriteKind::PipeLower), 2);
        let digits: Vec<_> = frame
            .sprites
            .iter()
            .filter_map(|s| match s.kind {
                SpriteKind::Digit(d) => Some(d),
                _ => None,
            })
            .collect();
        assert_eq!(digits, vec![1, 2]);
        assert_eq!(frame.sounds, vec![SoundCue::Wing]);
    }

    #[test]
    fn test_invincible_player_flickers() {
        let mut game = Game::new(1);
        game.player_mut().unwrap().invincible = true;

        game.time.now_ms = 50;
        let frame = build_frame(&game, 0);
        let player = frame
            .sprites
            .iter()
            .find(|s| matches!(s.kind, SpriteKind::Player { .. }))
            .unwrap();
        assert_eq!(player.alpha, FLICKER_ALPHA);
        assert!(player.glow);

        game.time.now_ms = 150;
        let frame = build_frame(&game, 0);
        let player = frame
            .sprites
            .iter()
            .find(|s| matches!(s.kind, SpriteKind::Player { .. }))
            .unwrap();
        assert_eq!(player.alpha, 255);
        assert!(!player.glow);
    }

    #[test]
    fn test_hud_lines_follow_effects() {
        let mut game = Game::new(1);
        game.effects.activate(PowerUpKind::SpeedBoost, 4500);
        game.effects.activate(PowerUpKind::SmallSize, 8000);
        let frame = build_frame(&game, 0);

        assert_eq!(frame.texts.len(), 2);
        assert_eq!(frame.texts[0].text, "Speed Boost: 4.5s");
        assert_eq!(frame.texts[0].color, PowerUpKind::SpeedBoost.color());
        assert_eq!(frame.texts[1].y, HUD_Y + HUD_LINE_HEIGHT);
    }

    #[test]
    fn test_game_over_overlay() {
        let mut game = Game::new(1);
        game.tick(&[InputEvent::Tap], 33);
        while game.tick(&[], 33).is_none() {}
        let frame = build_frame(&game, 0);
        assert_eq!(frame.phase, Phase::GameOver);
        assert_eq!(count(&frame, |k| *k == SpriteKind::GameOver), 1);
        assert!(frame.sounds.contains(&SoundCue::Hit));
    }
}
