use super::*;

// Factor : IDENTIFIER
//        | NUMBER
//        | LPAREN Expression RPAREN
//        ;
pub fn handle_factor(context: &mut Context) {
    match context.token_kind() {
        Some(TokenKind::Identifier) | Some(TokenKind::Number) => {
            context.consume();
        }

        Some(TokenKind::LParen) => {
            // Checked before the parenthesis is taken, so a refused group leaves it in place.
            if !context.enter_nested() {
                return;
            }
            let lparen_index = context.consume();
            handle_expression::handle_expression(context);
            context.expect_closing(TokenKind::RParen, lparen_index, "parenthesis opened here");
            context.leave_nested();
        }

        // Not consumed, the caller sees the same token next.
        _ => context.invalid_factor(),
    }
}
