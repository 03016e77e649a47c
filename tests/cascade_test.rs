// Highlight cascade over realistic chord shapes

use fretboard_wasm::engine::{cascade, rebuild_diffs};
use fretboard_wasm::errors::EngineError;
use fretboard_wasm::models::{Fretboard, PitchClass, Status, Tuning};

fn pc(value: u8) -> PitchClass {
    PitchClass::new(value).unwrap()
}

/// Build a fretboard from a chord diagram, low E string first
///
/// `None` means the string is muted; `highlight` lists string indices to
/// emphasize.
fn chord(frets: [Option<usize>; 6], highlight: &[usize]) -> Fretboard {
    let cells: Vec<_> = frets
        .iter()
        .enumerate()
        .filter_map(|(string, fret)| {
            let status = if highlight.contains(&string) {
                Status::Highlighted
            } else {
                Status::Selected
            };
            fret.map(|f| (string, f, status))
        })
        .collect();
    Fretboard::with_cells(Tuning::STANDARD, 15, &cells).unwrap()
}

/// x32010, C on the A string highlighted
fn c_major(highlight: &[usize]) -> Fretboard {
    chord([None, Some(3), Some(2), Some(0), Some(1), Some(0)], highlight)
}

/// xx3211
fn f_major(highlight: &[usize]) -> Fretboard {
    chord([None, None, Some(3), Some(2), Some(1), Some(1)], highlight)
}

/// 320003
fn g_major(highlight: &[usize]) -> Fretboard {
    chord([Some(3), Some(2), Some(0), Some(0), Some(0), Some(3)], highlight)
}

/// x02210
fn a_minor(highlight: &[usize]) -> Fretboard {
    chord([None, Some(0), Some(2), Some(2), Some(1), Some(0)], highlight)
}

#[test]
fn test_chord_progression_follows_voice_leading() {
    // Highlight E (third of C) on the D string
    let fretboards = vec![c_major(&[2]), f_major(&[]), g_major(&[]), c_major(&[])];
    let progression = cascade(&fretboards, 0).unwrap();

    // C -> F moves E up to F
    assert_eq!(progression.fretboards[1].highlighted_pitch_classes().to_vec(), vec![pc(5)]);
    // F -> G: {0, 5, 9} -> {2, 7, 11}: F moves up to G
    assert_eq!(progression.fretboards[2].highlighted_pitch_classes().to_vec(), vec![pc(7)]);
    // G -> C: G stays on G
    assert_eq!(progression.fretboards[3].highlighted_pitch_classes().to_vec(), vec![pc(7)]);
}

#[test]
fn test_cascade_runs_both_directions() {
    let fretboards = vec![a_minor(&[]), c_major(&[]), f_major(&[]), a_minor(&[])];
    // highlight the C of the C chord (A string, 3rd fret)
    let mut focused = fretboards.clone();
    focused[1] = c_major(&[1]);

    let progression = cascade(&focused, 1).unwrap();
    // Am -> C keeps C in place, so going left C stays C
    assert_eq!(progression.fretboards[0].highlighted_pitch_classes().to_vec(), vec![pc(0)]);
    // C -> F keeps C in place too
    assert_eq!(progression.fretboards[2].highlighted_pitch_classes().to_vec(), vec![pc(0)]);
    assert_eq!(progression.fretboards[3].highlighted_pitch_classes().to_vec(), vec![pc(0)]);
}

#[test]
fn test_idempotent() {
    let fretboards = vec![c_major(&[1, 2]), a_minor(&[]), f_major(&[]), g_major(&[])];
    let first = cascade(&fretboards, 0).unwrap();
    let second = cascade(&fretboards, 0).unwrap();
    assert_eq!(first, second);

    // re-cascading its own output changes nothing
    let third = cascade(&first.fretboards, 0).unwrap();
    assert_eq!(first, third);
}

#[test]
fn test_no_loss_across_valley() {
    // [2 notes, 1 note, 3 notes] with the vanishing note highlighted
    let fretboards = vec![
        Fretboard::with_cells(
            Tuning::STANDARD,
            15,
            &[(1, 3, Status::Highlighted), (2, 2, Status::Selected)],
        )
        .unwrap(), // C, E
        Fretboard::with_cells(Tuning::STANDARD, 15, &[(2, 2, Status::Selected)]).unwrap(), // E
        Fretboard::with_cells(
            Tuning::STANDARD,
            15,
            &[(1, 2, Status::Selected), (2, 2, Status::Selected), (3, 2, Status::Selected)],
        )
        .unwrap(), // B, E, A
    ];

    let progression = cascade(&fretboards, 0).unwrap();
    assert!(progression.fretboards[1].highlighted_pitch_classes().is_empty());

    // C went missing in the middle and lands on B, the nearest appearing note
    let last = &progression.fretboards[2];
    assert_eq!(last.highlighted_pitch_classes().to_vec(), vec![pc(11)]);
    assert_eq!(last.status(1, 2), Some(Status::Highlighted));
}

#[test]
fn test_no_loss_across_valley_walking_left() {
    // mirror of the valley above, focused on the last fretboard
    let fretboards = vec![
        Fretboard::with_cells(
            Tuning::STANDARD,
            15,
            &[(1, 2, Status::Selected), (2, 2, Status::Selected), (3, 2, Status::Selected)],
        )
        .unwrap(), // B, E, A
        Fretboard::with_cells(Tuning::STANDARD, 15, &[(2, 2, Status::Selected)]).unwrap(), // E
        Fretboard::with_cells(
            Tuning::STANDARD,
            15,
            &[(1, 3, Status::Highlighted), (2, 2, Status::Selected)],
        )
        .unwrap(), // C, E
    ];

    let progression = cascade(&fretboards, 2).unwrap();
    assert!(progression.fretboards[1].highlighted_pitch_classes().is_empty());

    let first = &progression.fretboards[0];
    assert_eq!(first.highlighted_pitch_classes().to_vec(), vec![pc(11)]);
    assert_eq!(first.status(1, 2), Some(Status::Highlighted));
}

#[test]
fn test_rejects_deserialized_tuning_out_of_midi_range() {
    let json = r#"{"tuning":{"open_strings":[250,45,50,55,59,64]},
        "strings":[[0,0,0,0,0,0,0,0,1],[0,0,0,0,0,0,0,0,0],[0,0,0,0,0,0,0,0,0],
                   [0,0,0,0,0,0,0,0,0],[0,0,0,0,0,0,0,0,0],[0,0,0,0,0,0,0,0,0]]}"#;
    let fretboard: Fretboard = serde_json::from_str(json).unwrap();
    assert!(matches!(fretboard.validate(), Err(EngineError::InvalidTuning(_))));
    assert!(matches!(
        cascade(&[fretboard], 0),
        Err(EngineError::InvalidTuning(_))
    ));
}

#[test]
fn test_highlights_stay_on_existing_notes() {
    let fretboards = vec![c_major(&[1, 2, 3, 4, 5]), g_major(&[]), a_minor(&[]), f_major(&[])];
    let progression = cascade(&fretboards, 0).unwrap();

    for (before, after) in fretboards.iter().zip(&progression.fretboards) {
        // same notes, only emphasis may differ
        assert_eq!(before.pitch_classes(), after.pitch_classes());
        for cell in after.active_cells() {
            assert!(before.status(cell.string, cell.fret).unwrap().is_active());
        }
    }
}

#[test]
fn test_no_highlight_is_invented() {
    let fretboards = vec![c_major(&[]), g_major(&[2]), a_minor(&[4])];
    let progression = cascade(&fretboards, 0).unwrap();
    for fretboard in &progression.fretboards {
        assert!(fretboard.highlighted_pitch_classes().is_empty());
    }
}

#[test]
fn test_diffs_match_rebuild() {
    let fretboards = vec![c_major(&[1]), f_major(&[]), g_major(&[])];
    let progression = cascade(&fretboards, 0).unwrap();
    let rebuilt = rebuild_diffs(&fretboards, 0).unwrap();
    assert_eq!(progression.left_diffs, rebuilt.left_diffs);
    assert_eq!(progression.right_diffs, rebuilt.right_diffs);
}
