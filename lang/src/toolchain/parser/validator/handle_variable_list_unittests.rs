#[cfg(test)]
mod tests {
    use crate::minipas;
    use crate::toolchain::parser::validator_unittests::tests::check_validation;

    #[test]
    fn single_variable() {
        check_validation(minipas!("program P; var x; begin end"), vec![]);
    }

    #[test]
    fn comma_separated_variables() {
        check_validation(minipas!("program P; var x, y, z; begin end"), vec![]);
        check_validation(minipas!("program P; var x,y,z; begin end"), vec![]);
    }

    #[test]
    fn missing_comma() {
        // The second name is left in place, so the block start and the statement after it report
        // too.
        check_validation(
            minipas!("program P; var x y; begin end"),
            vec![
                "expected SEMICOLON, found IDENTIFIER",
                "expected BEGIN, found IDENTIFIER",
                "expected ASSIGN, found SEMICOLON",
                "invalid factor: SEMICOLON",
                "expected END, found BEGIN",
            ],
        );
    }

    #[test]
    fn trailing_comma() {
        check_validation(
            minipas!("program P; var x, ; begin end"),
            vec!["expected IDENTIFIER, found SEMICOLON"],
        );
    }

    #[test]
    fn leading_comma() {
        check_validation(
            minipas!("program P; var , x; begin end"),
            vec!["expected IDENTIFIER, found COMMA"],
        );
    }

    #[test]
    fn empty_declarations() {
        check_validation(
            minipas!("program P; var ; begin end"),
            vec!["expected IDENTIFIER, found SEMICOLON"],
        );
    }
}
