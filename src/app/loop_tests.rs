use super::*;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use rand::{Rng, SeedableRng};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::Terminal;

fn key(code: KeyCode) -> Result<Event, std::io::Error> {
    Ok(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn quit() -> Result<Event, std::io::Error> {
    Ok(Event::Key(KeyEvent::new(
        KeyCode::Char('q'),
        KeyModifiers::CONTROL,
    )))
}

fn screen_text(buffer: &Buffer) -> String {
    let area = buffer.area;
    (area.top()..area.bottom())
        .map(|y| {
            let mut row: String = (area.left()..area.right())
                .map(|x| buffer[(x, y)].symbol())
                .collect();
            row.push('\n');
            row
        })
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_typing_reveals_suggestions_and_badge() {
    let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);

    let driver = tokio::spawn(async move {
        for c in "lever".chars() {
            event_tx.send(key(KeyCode::Char(c))).await.unwrap();
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        // Past the transition, the whole stagger and the typing pause
        tokio::time::sleep(Duration::from_millis(800)).await;
        event_tx.send(quit()).await.unwrap();
    });

    run_loop_with_events(&mut terminal, AppState::default(), event_rx)
        .await
        .unwrap();
    driver.await.unwrap();

    let screen = screen_text(terminal.backend().buffer());
    assert!(screen.contains("Suggesties"));
    assert!(screen.contains("lever overlijden"));
    assert!(screen.contains("Voor- en nadelen van lever"));
    assert!(screen.contains("⏎ Enter"));
}

#[tokio::test(start_paused = true)]
async fn test_enter_without_typing_stays_on_start() {
    let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);

    let driver = tokio::spawn(async move {
        event_tx.send(key(KeyCode::Enter)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(500)).await;
        event_tx.send(quit()).await.unwrap();
    });

    run_loop_with_events(&mut terminal, AppState::default(), event_rx)
        .await
        .unwrap();
    driver.await.unwrap();

    let screen = screen_text(terminal.backend().buffer());
    assert!(screen.contains("Verfijn je zoekopdracht"));
    assert!(!screen.contains("Gerelateerde vragen"));
}

#[tokio::test(start_paused = true)]
async fn test_enter_commits_to_results() {
    let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);

    let driver = tokio::spawn(async move {
        for c in "lever".chars() {
            event_tx.send(key(KeyCode::Char(c))).await.unwrap();
        }
        tokio::time::sleep(Duration::from_millis(400)).await;
        event_tx.send(key(KeyCode::Enter)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(800)).await;
        event_tx.send(quit()).await.unwrap();
    });

    run_loop_with_events(&mut terminal, AppState::default(), event_rx)
        .await
        .unwrap();
    driver.await.unwrap();

    let screen = screen_text(terminal.backend().buffer());
    assert!(screen.contains("Resultaten"));
    assert!(screen.contains("Gerelateerde vragen"));
    assert!(screen.contains("Niet gevonden wat je zocht?"));
    assert!(!screen.contains("Suggesties"));
}

#[tokio::test(start_paused = true)]
async fn test_escape_from_suggestions_clears_query() {
    let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(100);

    let driver = tokio::spawn(async move {
        for c in "nier".chars() {
            event_tx.send(key(KeyCode::Char(c))).await.unwrap();
        }
        tokio::time::sleep(Duration::from_millis(400)).await;
        event_tx.send(key(KeyCode::Esc)).await.unwrap();
        tokio::time::sleep(Duration::from_millis(400)).await;
        event_tx.send(quit()).await.unwrap();
    });

    run_loop_with_events(&mut terminal, AppState::default(), event_rx)
        .await
        .unwrap();
    driver.await.unwrap();

    let screen = screen_text(terminal.backend().buffer());
    assert!(!screen.contains("nier"));
    assert!(screen.contains(crate::app::state::input::PLACEHOLDER));
    assert!(screen.contains("Verfijn je zoekopdracht"));
}

#[tokio::test]
async fn test_event_errors_end_the_loop() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let (event_tx, event_rx) = mpsc::channel(1);
    event_tx
        .send(Err(std::io::Error::other("terminal gone")))
        .await
        .unwrap();

    let result = run_loop_with_events(&mut terminal, AppState::default(), event_rx).await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_keystroke_fuzzing() {
    let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
    let app_state = AppState::default();

    let (event_tx, event_rx) = mpsc::channel(100);

    // Spawn a task to feed random events
    let fuzzer_handle = tokio::spawn(async move {
        let mut rng = rand::rngs::StdRng::seed_from_u64(42);
        for _ in 0..10000 {
            let event = match rng.gen_range(0..100) {
                0..=5 => {
                    let w = rng.gen_range(10..200);
                    let h = rng.gen_range(10..100);
                    Event::Resize(w, h)
                }
                6..=25 => generate_random_mouse(&mut rng, ratatui::layout::Size::new(80, 24)),
                _ => generate_random_key(&mut rng),
            };
            if event_tx.send(Ok(event)).await.is_err() {
                break;
            }
            // Yield so timers get a chance to fire between keystrokes
            if rng.gen_bool(0.1) {
                tokio::task::yield_now().await;
            }
        }
        let _ = event_tx.send(quit()).await;
    });

    // Run the real loop (with a test backend)
    let result = tokio::time::timeout(
        std::time::Duration::from_secs(30),
        run_loop_with_events(&mut terminal, app_state, event_rx),
    )
    .await;

    match result {
        Ok(res) => res.unwrap(),
        Err(_) => panic!("Fuzzer timed out - possible deadlock or too slow"),
    }

    fuzzer_handle.await.unwrap();
}

fn generate_random_key<R: Rng>(rng: &mut R) -> Event {
    let code = match rng.gen_range(0..20) {
        0 => KeyCode::Esc,
        1 => KeyCode::Enter,
        2 => KeyCode::Left,
        3 => KeyCode::Right,
        4 => KeyCode::Up,
        5 => KeyCode::Down,
        6 => KeyCode::Home,
        7 => KeyCode::End,
        8 => KeyCode::F(2),
        9 => KeyCode::BackTab,
        10 => KeyCode::Tab,
        11 => KeyCode::Delete,
        12 | 13 => KeyCode::Backspace,
        _ => {
            let c = rng.gen_range(b' '..=b'~') as char;
            KeyCode::Char(c)
        }
    };

    let mut modifiers = KeyModifiers::empty();
    if rng.gen_bool(0.05) {
        modifiers.insert(KeyModifiers::CONTROL);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::ALT);
    }
    if rng.gen_bool(0.1) {
        modifiers.insert(KeyModifiers::SHIFT);
    }

    Event::Key(KeyEvent::new(code, modifiers))
}

fn generate_random_mouse<R: Rng>(rng: &mut R, size: ratatui::layout::Size) -> Event {
    use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
    let kind = match rng.gen_range(0..5) {
        0 | 1 => MouseEventKind::Down(MouseButton::Left),
        2 => MouseEventKind::ScrollUp,
        3 => MouseEventKind::ScrollDown,
        _ => MouseEventKind::Moved,
    };

    let column = rng.gen_range(0..size.width);
    let row = rng.gen_range(0..size.height);

    Event::Mouse(MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::empty(),
    })
}
