use super::*;

// SimpleExpression : Term ( ( PLUS | MINUS ) Term )* ;
pub fn handle_simple_expression(context: &mut Context) {
    handle_term::handle_term(context);
    while is_additive(context.token_kind()) {
        context.consume();
        handle_term::handle_term(context);
    }
}
