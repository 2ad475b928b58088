use super::*;

// StatementList : Statement ( SEMICOLON Statement )* ;
pub fn handle_statement_list(context: &mut Context) {
    if !context.enter_nested() {
        return;
    }

    handle_statement::handle_statement(context);
    while context.at(TokenKind::Semicolon) {
        context.consume();
        handle_statement::handle_statement(context);
    }

    context.leave_nested();
}
