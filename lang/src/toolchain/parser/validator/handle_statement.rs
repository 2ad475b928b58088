use super::*;

// Statement : IDENTIFIER ASSIGN Expression
//           | IF Expression THEN StatementList ( ELSE StatementList )?
//           | WHILE Expression DO StatementList
//           | WRITELN LPAREN Expression RPAREN
//           | <empty>
//           ;
pub fn handle_statement(context: &mut Context) {
    match context.token_kind() {
        Some(TokenKind::Identifier) => {
            context.consume();
            context.expect(TokenKind::Assign);
            handle_expression::handle_expression(context);
        }

        Some(TokenKind::If) => {
            context.consume();
            handle_expression::handle_expression(context);
            context.expect(TokenKind::Then);
            handle_statement_list::handle_statement_list(context);
            if context.at(TokenKind::Else) {
                context.consume();
                handle_statement_list::handle_statement_list(context);
            }
        }

        Some(TokenKind::While) => {
            context.consume();
            handle_expression::handle_expression(context);
            context.expect(TokenKind::Do);
            handle_statement_list::handle_statement_list(context);
        }

        Some(TokenKind::Writeln) => {
            context.consume();
            let lparen_index = context.token_index();
            let opened = context.expect(TokenKind::LParen);
            handle_expression::handle_expression(context);
            if opened {
                context.expect_closing(TokenKind::RParen, lparen_index, "writeln opened here");
            } else {
                context.expect(TokenKind::RParen);
            }
        }

        // Any other token, or none at all, makes an empty statement. Whoever called us decides
        // what to make of the token.
        _ => {}
    }
}
