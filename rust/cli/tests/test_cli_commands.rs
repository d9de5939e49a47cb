use fivedraw_cli::run;

fn run_cmd(args: &[&str]) -> (i32, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run(args.iter().copied(), &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn rank_names_the_combination() {
    let (code, out, _) = run_cmd(&["fivedraw", "rank", "2c", "3c", "4c", "5c", "6c"]);
    assert_eq!(code, 0);
    assert!(out.contains("Straight flush (0x09"), "{out}");

    let (code, out, _) = run_cmd(&["fivedraw", "rank", "KS", "KD", "5C", "5H", "AS"]);
    assert_eq!(code, 0);
    assert!(out.contains("Two pairs (0x03000D5E)"), "{out}");
}

#[test]
fn rank_rejects_bad_cards() {
    let (code, _, err) = run_cmd(&["fivedraw", "rank", "KS", "KD", "5C", "5H", "1S"]);
    assert_eq!(code, 2);
    assert!(err.contains("Invalid card '1S'"), "{err}");

    let (code, _, err) = run_cmd(&["fivedraw", "rank", "KS", "KS", "5C", "5H", "AS"]);
    assert_eq!(code, 2);
    assert!(err.contains("Duplicate card"));
}

#[test]
fn deal_prints_one_hand_per_seat() {
    let (code, out, _) = run_cmd(&["fivedraw", "deal", "--players", "4", "--seed", "9"]);
    assert_eq!(code, 0);
    assert!(out.starts_with("Seed: 9\n"));
    assert_eq!(out.lines().filter(|l| l.starts_with("Seat ")).count(), 4);
    assert!(out.contains("Deck: 32 cards left"));
}

#[test]
fn missing_subcommand_is_an_error() {
    let (code, _, err) = run_cmd(&["fivedraw"]);
    assert_eq!(code, 2);
    assert!(err.contains("Usage: fivedraw"));
}
