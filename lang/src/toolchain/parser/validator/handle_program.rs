use super::*;

// Program : PROGRAM IDENTIFIER SEMICOLON Declarations BEGIN StatementList END ;
pub fn handle_program(context: &mut Context) {
    context.expect(TokenKind::Program);
    context.expect(TokenKind::Identifier);
    context.expect(TokenKind::Semicolon);

    handle_declarations::handle_declarations(context);

    let begin_index = context.token_index();
    let opened = context.expect(TokenKind::Begin);

    handle_statement_list::handle_statement_list(context);

    if opened {
        context.expect_closing(TokenKind::End, begin_index, "block opened here");
    } else {
        context.expect(TokenKind::End);
    }

    // Anything after the closing END is left unexamined.
    if !context.is_at_end() {
        tracing::debug!(index = context.token_index(), "ignoring trailing tokens");
    }
}
