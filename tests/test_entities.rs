use space_invaders::entities::*;

#[test]
fn rect_edges() {
    let r = Rect::new(2, 3, 4, 5);
    assert_eq!(r.left(), 2);
    assert_eq!(r.right(), 6);
    assert_eq!(r.top(), 3);
    assert_eq!(r.bottom(), 8);
    assert_eq!(r.center_x(), 4);
}

#[test]
fn rect_overlap() {
    let alien = Rect::new(10, 2, 3, 1);
    assert!(alien.intersects(&Rect::new(12, 2, 1, 1)));
    assert!(Rect::new(12, 2, 1, 1).intersects(&alien));
    // Right/bottom edges are exclusive: touching is not overlapping
    assert!(!alien.intersects(&Rect::new(13, 2, 1, 1)));
    assert!(!alien.intersects(&Rect::new(10, 3, 1, 1)));
    assert!(!alien.intersects(&Rect::new(9, 2, 1, 1)));
}

#[test]
fn direction_step() {
    assert_eq!(Direction::Left.step(), -1);
    assert_eq!(Direction::Right.step(), 1);
}

#[test]
fn enum_equality() {
    assert_eq!(AlienColor::Red, AlienColor::Red);
    assert_ne!(AlienColor::Red, AlienColor::Yellow);
    assert_eq!(GameStatus::Victory(3), GameStatus::Victory(3));
    assert_ne!(GameStatus::Victory(3), GameStatus::Victory(2));
    assert_ne!(GameStatus::Running, GameStatus::Paused);
    assert_ne!(Side::Left, Side::Right);
}

#[test]
fn default_controls_are_idle() {
    let c = Controls::default();
    assert!(!c.left && !c.right && !c.fire);
}

#[test]
fn game_state_clone_is_independent() {
    let original = GameState {
        player: Player {
            rect: Rect::new(19, 18, 3, 2),
            lives: 3,
            ready: true,
            laser_time: 0,
            lasers: Vec::new(),
        },
        aliens: Vec::new(),
        alien_direction: Direction::Right,
        alien_lasers: Vec::new(),
        blocks: Vec::new(),
        extra: None,
        extra_spawn_time: 30,
        alien_laser_timer: 24,
        score: 0,
        high_score: 0,
        wave: 1,
        status: GameStatus::Running,
        frame: 0,
        width: 40,
        height: 20,
    };
    let mut cloned = original.clone();

    // Mutating the clone must not affect the original
    cloned.player.rect.x = 99;
    cloned.score = 999;
    cloned.aliens.push(Alien {
        rect: Rect::new(5, 5, 3, 1),
        color: AlienColor::Green,
    });

    assert_eq!(original.player.rect.x, 19);
    assert_eq!(original.score, 0);
    assert!(original.aliens.is_empty());
}
