//! Accept/reject scenarios for the SVO grammar, with tree-shape and error
//! location checks.

use sintagma::{parse, Category, ErrorKind, Expected, Found, Phrase, TreeNode};

fn accept(sentence: &str) -> TreeNode {
    match parse(sentence) {
        Ok(tree) => tree,
        Err(e) => panic!("expected acceptance of {sentence:?}, got: {e}"),
    }
}

fn reject(sentence: &str) -> sintagma::ParseError {
    match parse(sentence) {
        Ok(_) => panic!("expected rejection of {sentence:?}"),
        Err(e) => e,
    }
}

#[test]
fn simple_transitive_sentence() {
    let tree = accept("La niña mira el perro");
    assert_eq!(tree.phrase(), Some(Phrase::S));
    assert_eq!(tree.children().len(), 2);

    let subject = &tree.children()[0];
    assert_eq!(subject.phrase(), Some(Phrase::Np));
    let subject_cats: Vec<_> = subject
        .children()
        .iter()
        .filter_map(TreeNode::category)
        .collect();
    assert_eq!(subject_cats, vec![Category::Det, Category::N]);
    assert_eq!(subject.text(), "la nina");

    let predicate = &tree.children()[1];
    assert_eq!(predicate.phrase(), Some(Phrase::Vp));
    assert_eq!(predicate.children().len(), 2);
    assert_eq!(predicate.children()[0].category(), Some(Category::V));
    assert_eq!(predicate.children()[0].text(), "mira");
    assert_eq!(predicate.children()[1].text(), "el perro");
}

#[test]
fn verb_first_sentence_is_rejected_at_the_subject_position() {
    let err = reject("Corre la niña el perro");
    assert_eq!(err.kind, ErrorKind::UnexpectedCategory);
    assert_eq!(err.position, 0);
    assert_eq!(err.found, Found::Word("Corre".to_string()));
    assert!(err.expected.contains(&Expected::Category(Category::N)));
    assert!(err.expected.contains(&Expected::Category(Category::Name)));
    assert!(err.expected.contains(&Expected::Category(Category::Pron)));
}

#[test]
fn coordinated_names_as_subject() {
    let tree = accept("Melvin y Mario miran los autos");
    let subject = &tree.children()[0];
    assert_eq!(subject.phrase(), Some(Phrase::Np));
    assert_eq!(subject.children().len(), 3);
    assert_eq!(subject.children()[0].text(), "melvin");
    assert_eq!(subject.children()[1].category(), Some(Category::Conj));
    assert_eq!(subject.children()[1].text(), "y");
    assert_eq!(subject.children()[2].text(), "mario");

    let predicate = &tree.children()[1];
    assert_eq!(predicate.children()[0].text(), "miran");
    assert_eq!(predicate.children()[1].text(), "los autos");
}

#[test]
fn longer_coordination_stays_flat_and_ordered() {
    let tree = accept("Juan y Maria y Ana corren");
    let subject = &tree.children()[0];
    assert_eq!(subject.children().len(), 5);
    assert_eq!(subject.text(), "juan y maria y ana");
}

#[test]
fn unknown_word_is_located() {
    let err = reject("xyz corre");
    assert_eq!(err.kind, ErrorKind::UnknownWord { word: "xyz".to_string() });
    assert_eq!(err.position, 0);
}

#[test]
fn unknown_word_after_determiner_is_located_at_the_noun_slot() {
    let err = reject("la xyz corre");
    assert_eq!(err.kind, ErrorKind::UnknownWord { word: "xyz".to_string() });
    assert_eq!(err.position, 1);
}

#[test]
fn empty_and_punctuation_only_inputs() {
    for input in ["", "   ", "...?"] {
        let err = reject(input);
        assert_eq!(err.kind, ErrorKind::EmptyInput, "input: {input:?}");
        assert_eq!(err.found, Found::EndOfInput);
    }
}

#[test]
fn intransitive_verb_with_no_object() {
    let tree = accept("El perro duerme");
    let predicate = &tree.children()[1];
    assert_eq!(predicate.phrase(), Some(Phrase::Vp));
    assert_eq!(predicate.children().len(), 1);
    assert_eq!(predicate.children()[0].category(), Some(Category::V));
}

#[test]
fn adjectives_stack_between_determiner_and_noun() {
    let tree = accept("La pequena hermosa niña come");
    let subject = &tree.children()[0];
    let cats: Vec<_> = subject
        .children()
        .iter()
        .filter_map(TreeNode::category)
        .collect();
    assert_eq!(
        cats,
        vec![Category::Det, Category::Adj, Category::Adj, Category::N]
    );
}

#[test]
fn ambiguous_el_resolves_as_determiner_before_a_noun() {
    let tree = accept("El perro come");
    let subject = &tree.children()[0];
    assert_eq!(subject.children()[0].category(), Some(Category::Det));
}

#[test]
fn ambiguous_el_resolves_as_pronoun_when_no_noun_follows() {
    let tree = accept("El duerme");
    let subject = &tree.children()[0];
    assert_eq!(subject.phrase(), Some(Phrase::Np));
    assert_eq!(subject.children().len(), 1);
    assert_eq!(subject.children()[0].category(), Some(Category::Pron));
    assert_eq!(subject.children()[0].text(), "el");
}

#[test]
fn pronoun_object_via_atom_retry() {
    let tree = accept("La niña mira el");
    let predicate = &tree.children()[1];
    let object = &predicate.children()[1];
    assert_eq!(object.children()[0].category(), Some(Category::Pron));
}

#[test]
fn missing_verb_is_a_premature_end() {
    let err = reject("La niña");
    assert_eq!(err.kind, ErrorKind::PrematureEnd);
    assert_eq!(err.position, 2);
    assert_eq!(err.expected, vec![Expected::Category(Category::V)]);
    assert_eq!(err.found, Found::EndOfInput);
}

#[test]
fn determiner_with_no_noun_is_a_premature_end() {
    let err = reject("La niña mira la");
    assert_eq!(err.kind, ErrorKind::PrematureEnd);
    assert_eq!(err.position, 4);
    assert!(err.expected.contains(&Expected::Category(Category::N)));
}

#[test]
fn failing_object_attempt_does_not_fall_back_to_intransitive() {
    // "grande" can start an NP, so the object parse is committed; when it
    // then finds no noun, the whole parse fails.
    let err = reject("La niña duerme grande");
    assert_eq!(err.kind, ErrorKind::PrematureEnd);
    assert_eq!(err.position, 4);
}

#[test]
fn non_verb_at_the_verb_slot() {
    let err = reject("Juan grande");
    assert_eq!(err.kind, ErrorKind::UnexpectedCategory);
    assert_eq!(err.position, 1);
    assert_eq!(err.expected, vec![Expected::Category(Category::V)]);
    assert_eq!(err.found, Found::Word("grande".to_string()));
}

#[test]
fn trailing_input_after_a_complete_sentence() {
    let err = reject("El perro duerme y");
    assert_eq!(err.kind, ErrorKind::TrailingInput);
    assert_eq!(err.position, 3);
    assert_eq!(err.expected, vec![Expected::EndOfInput]);
    assert_eq!(err.found, Found::Word("y".to_string()));
}

#[test]
fn trailing_input_after_a_transitive_sentence() {
    let err = reject("La niña mira el perro corre");
    assert_eq!(err.kind, ErrorKind::TrailingInput);
    assert_eq!(err.position, 5);
}

#[test]
fn accents_and_case_are_normalized_before_lookup() {
    accept("LA NIÑA MIRA EL PERRO");
    accept("La niña mira el perro.");
    let tree = accept("Sofía corre");
    assert_eq!(tree.children()[0].text(), "sofia");
}

#[test]
fn error_messages_name_position_and_expectations() {
    let err = reject("Juan grande");
    let message = err.to_string();
    assert!(message.contains("token 1"), "message: {message}");
    assert!(message.contains('V'), "message: {message}");
    assert!(err.expected_list().contains('V'));
}
