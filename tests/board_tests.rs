use chocolate_bar::{Direction, GameEngine, Piece};

#[test]
fn test_edge_slices_capture_board_order() {
    let engine = GameEngine::with_dimensions(3, 2, 2, 2).unwrap();
    let bar = engine.bar();

    let up = bar.edge(Direction::Up);
    assert_eq!(up.direction, Direction::Up);
    assert_eq!(up.pieces, vec![Piece::Normal, Piece::Normal]);
    assert!(!up.contains_spoiled());

    let right = bar.edge(Direction::Right);
    assert_eq!(right.pieces, vec![Piece::Normal, Piece::Spoiled, Piece::Normal]);
    assert!(right.contains_spoiled());
    assert!(bar.edge_has_spoiled(Direction::Right));

    let left = bar.edge(Direction::Left);
    assert_eq!(left.pieces.len(), 3);
    assert!(!bar.edge_has_spoiled(Direction::Left));
    assert!(!bar.edge_has_spoiled(Direction::Down));
}

#[test]
fn test_removing_leading_edges_shifts_spoiled() {
    let mut engine = GameEngine::with_dimensions(4, 4, 3, 3).unwrap();
    assert_eq!(engine.spoiled(), (2, 2));

    engine.apply_direction(Direction::Up).unwrap();
    assert_eq!(engine.spoiled(), (1, 2));
    engine.apply_direction(Direction::Left).unwrap();
    assert_eq!(engine.spoiled(), (1, 1));
    assert_eq!((engine.rows(), engine.cols()), (3, 3));
    assert_eq!(engine.cells()[1][1], Piece::Spoiled);
}

#[test]
fn test_removing_trailing_edges_keeps_spoiled() {
    let mut engine = GameEngine::with_dimensions(4, 4, 2, 2).unwrap();
    engine.apply_direction(Direction::Down).unwrap();
    engine.apply_direction(Direction::Right).unwrap();
    assert_eq!(engine.spoiled(), (1, 1));
    assert_eq!((engine.rows(), engine.cols()), (3, 3));
    assert!(engine.cells().iter().all(|row| row.len() == 3));
    assert_eq!(engine.cells()[1][1], Piece::Spoiled);
}

#[test]
fn test_bar_debug_shows_grid() {
    let engine = GameEngine::with_dimensions(1, 2, 1, 2).unwrap();
    let text = format!("{:?}", engine.bar());
    assert!(text.contains("1x2"));
    assert!(text.contains("O X"));
}
