use super::*;

// Expression : SimpleExpression ( ( EQUALS | GREATER | LESS ) SimpleExpression )? ;
pub fn handle_expression(context: &mut Context) {
    handle_simple_expression::handle_simple_expression(context);
    if is_relational(context.token_kind()) {
        context.consume();
        handle_simple_expression::handle_simple_expression(context);
    }
}
