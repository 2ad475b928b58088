use super::*;

// Term : Factor ( ( TIMES | DIVIDE ) Factor )* ;
pub fn handle_term(context: &mut Context) {
    handle_factor::handle_factor(context);
    while is_multiplicative(context.token_kind()) {
        context.consume();
        handle_factor::handle_factor(context);
    }
}
