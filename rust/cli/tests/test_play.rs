use std::io::Cursor;

use fivedraw_cli::run_with_input;

fn play(args: &[&str], input: &str) -> (i32, String, String) {
    let mut stdin = Cursor::new(input.as_bytes().to_vec());
    let mut out = Vec::new();
    let mut err = Vec::new();
    let code = run_with_input(args.iter().copied(), &mut stdin, &mut out, &mut err);
    (
        code,
        String::from_utf8_lossy(&out).into_owned(),
        String::from_utf8_lossy(&err).into_owned(),
    )
}

#[test]
fn human_quits_at_the_first_prompt() {
    let (code, out, _) = play(
        &["fivedraw", "play", "--human", "ann", "--seed", "42"],
        "q\n",
    );
    assert_eq!(code, 0);
    assert!(out.contains("[ann] deals"));
    assert!(out.contains("small blind $16"));
    assert!(out.contains("Quit after 1 round(s)"));
}

#[test]
fn same_seed_and_answers_replay_the_same_session() {
    let args = [
        "fivedraw", "play", "--human", "ann", "--players", "3", "--seed", "5", "--rounds", "3",
    ];
    let answers = "0\n\n".repeat(30);
    let (code, a, _) = play(&args, &answers);
    assert_eq!(code, 0);
    let (_, b, _) = play(&args, &answers);
    assert_eq!(a, b);
    assert!(a.contains("Round 3") || a.contains("Winner:"));
}

#[test]
fn too_many_humans_is_an_error() {
    let (code, _, err) = play(
        &["fivedraw", "play", "--players", "2", "--human", "a", "--human", "b", "--human", "c"],
        "",
    );
    assert_eq!(code, 2);
    assert!(err.contains("do not fit"));
}
